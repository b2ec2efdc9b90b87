//! Abstraction for sourcing the player's battle decisions.
//!
//! Sessions ask an [`ActionProvider`] what to do each round, so the same
//! battle loop runs with console input, scripted fixtures, or simple policies.
use std::collections::VecDeque;

use game_core::{Character, HEALTH_POTION, Inventory, Monster};

/// What the player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum BattleAction {
    Attack,
    UsePotion,
}

/// Trait for choosing the player's action each round.
///
/// Different implementations can handle:
/// - Player input (from a CLI prompt)
/// - Scripted/replayed actions
/// - Testing fixtures
pub trait ActionProvider {
    fn next_action(
        &mut self,
        player: &Character,
        enemy: &Monster,
        inventory: &Inventory,
    ) -> BattleAction;
}

/// Attacks every round.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAttack;

impl ActionProvider for AlwaysAttack {
    fn next_action(&mut self, _: &Character, _: &Monster, _: &Inventory) -> BattleAction {
        BattleAction::Attack
    }
}

/// Drinks a potion whenever health falls below `potion_below` and one is
/// available; attacks otherwise.
#[derive(Clone, Copy, Debug)]
pub struct CautiousProvider {
    pub potion_below: u32,
}

impl CautiousProvider {
    pub fn new(potion_below: u32) -> Self {
        Self { potion_below }
    }
}

impl ActionProvider for CautiousProvider {
    fn next_action(
        &mut self,
        player: &Character,
        _: &Monster,
        inventory: &Inventory,
    ) -> BattleAction {
        if player.health() < self.potion_below && inventory.has(HEALTH_POTION) {
            BattleAction::UsePotion
        } else {
            BattleAction::Attack
        }
    }
}

/// Replays a fixed sequence of actions, then keeps attacking.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    script: VecDeque<BattleAction>,
}

impl ScriptedProvider {
    pub fn new(script: impl IntoIterator<Item = BattleAction>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Actions not yet replayed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn next_action(&mut self, _: &Character, _: &Monster, _: &Inventory) -> BattleAction {
        self.script.pop_front().unwrap_or(BattleAction::Attack)
    }
}
