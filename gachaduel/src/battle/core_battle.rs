use anyhow::Result;
use gachaduel_calc::{
    Advantage,
    DamageInput,
    compute_damage,
};
use gachaduel_data::{
    Attribute,
    AttributeChart,
    DataStore,
    Difficulty,
    Id,
    ItemData,
};
use gachaduel_prng::RandomSource;

use crate::{
    Profile,
    battle::{
        BattleOutcome,
        BattleState,
        PlayerAction,
        Team,
        TurnOwner,
    },
    error::{
        ActionInProgressError,
        BattleOverError,
        ItemUnavailableError,
        NotCpuTurnError,
        NotPlayerTurnError,
        general_error,
        not_found_error,
    },
    log::EventLog,
    log_event,
    rewards,
};

/// A single battle between the player's team and a CPU team.
///
/// The session is the only engine state with a bounded lifetime: it is
/// created when a battle starts and discarded when the battle ends. Exactly
/// one session should be live at a time; the caller owns it.
///
/// Turns alternate between the player and the CPU. Every accepted action
/// computes and commits its full effect (HP changes, succession, turn flip,
/// coin award) as one unit before another action is accepted; actions
/// submitted out of turn, after the battle is over, or while a transition
/// is still committing are rejected without any state change.
pub struct BattleSession {
    difficulty: Difficulty,
    chart: AttributeChart,
    player_team: Team,
    cpu_team: Team,
    state: BattleState,
    guarding: bool,
    pending: bool,
    prng: Box<dyn RandomSource>,
    log: EventLog,
}

impl BattleSession {
    pub(crate) fn new(
        difficulty: Difficulty,
        chart: AttributeChart,
        player_team: Team,
        cpu_team: Team,
        prng: Box<dyn RandomSource>,
    ) -> Result<Self> {
        let mut session = Self {
            difficulty,
            chart,
            player_team,
            cpu_team,
            state: BattleState::PlayerTurn,
            guarding: false,
            pending: false,
            prng,
            log: EventLog::new(),
        };
        session
            .log
            .push(log_event!("battle", format!("difficulty:{}", session.difficulty)));
        let player = session.active_player()?;
        session
            .log
            .push(log_event!("send", "actor:player", format!("mon:{}", player.0)));
        let cpu = session.active_cpu()?;
        session
            .log
            .push(log_event!("send", "actor:cpu", format!("mon:{}", cpu.0)));
        Ok(session)
    }

    /// The difficulty the battle was started with.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The current state of the turn machine.
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// The owner of the current turn, if the battle is still running.
    pub fn turn_owner(&self) -> Option<TurnOwner> {
        self.state.turn_owner()
    }

    /// The outcome, if the battle is over.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.state.outcome()
    }

    /// Whether the player is guarding the CPU's next attack.
    pub fn guarding(&self) -> bool {
        self.guarding
    }

    /// The player's team.
    pub fn player_team(&self) -> &Team {
        &self.player_team
    }

    /// The CPU's team.
    pub fn cpu_team(&self) -> &Team {
        &self.cpu_team
    }

    /// The seed the session's random source was created with, for replay.
    pub fn initial_seed(&self) -> u64 {
        self.prng.initial_seed()
    }

    /// The battle event log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// The battle event log, for incremental read-out.
    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    fn active_player(&self) -> Result<(String, u64, Attribute)> {
        let combatant = self
            .player_team
            .active()
            .ok_or_else(|| general_error("no active player combatant"))?;
        Ok((
            combatant.name().to_owned(),
            combatant.attack(),
            combatant.attribute(),
        ))
    }

    fn active_cpu(&self) -> Result<(String, u64, Attribute)> {
        let combatant = self
            .cpu_team
            .active()
            .ok_or_else(|| general_error("no active CPU combatant"))?;
        Ok((
            combatant.name().to_owned(),
            combatant.attack(),
            combatant.attribute(),
        ))
    }

    fn ensure_actionable(&self) -> Result<()> {
        if self.pending {
            return Err(ActionInProgressError.into());
        }
        if let BattleState::Over(_) = self.state {
            return Err(BattleOverError.into());
        }
        Ok(())
    }

    /// Submits the player's action for this turn.
    ///
    /// Fails, mutating nothing, if it is not the player's turn, the battle
    /// is over, a previous action has not committed, or the chosen item is
    /// not available.
    pub fn submit_player_action(
        &mut self,
        data: &dyn DataStore,
        profile: &mut Profile,
        action: PlayerAction,
    ) -> Result<()> {
        self.ensure_actionable()?;
        if self.state != BattleState::PlayerTurn {
            return Err(NotPlayerTurnError.into());
        }
        match action {
            PlayerAction::Attack => self.player_attack(profile),
            PlayerAction::Guard => self.player_guard(),
            PlayerAction::UseItem { item } => {
                let item_data = data
                    .item(&item)?
                    .ok_or_else(|| not_found_error(&item))?;
                if profile.item_count(&item) == 0 {
                    return Err(ItemUnavailableError::new(item).into());
                }
                self.player_use_item(profile, item, item_data)
            }
        }
    }

    fn player_attack(&mut self, profile: &mut Profile) -> Result<()> {
        let (attacker_name, attack, attacker_attribute) = self.active_player()?;
        let (defender_name, _, defender_attribute) = self.active_cpu()?;
        let damage = compute_damage(
            &self.chart,
            &DamageInput {
                attack,
                attacker_attribute,
                defender_attribute,
                difficulty: self.difficulty,
                cpu_attacker: false,
            },
        );

        self.pending = true;
        self.log.push(log_event!(
            "attack",
            "actor:player",
            format!("mon:{attacker_name}"),
            format!("target:{defender_name}"),
            format!("damage:{}", damage.value),
        ));
        if damage.advantage != Advantage::Neutral {
            self.log.push(log_event!("advantage", damage.advantage));
        }

        let mut fainted = false;
        if let Some(defender) = self.cpu_team.active_mut() {
            defender.apply_damage(damage.value);
            fainted = defender.fainted();
        }
        if fainted {
            self.log
                .push(log_event!("faint", "actor:cpu", format!("mon:{defender_name}")));
            match self.cpu_team.advance() {
                Some(next) => {
                    let name = next.name().to_owned();
                    self.log
                        .push(log_event!("send", "actor:cpu", format!("mon:{name}")));
                    self.state = BattleState::CpuTurn;
                }
                None => {
                    let coins = rewards::victory_coins(self.difficulty);
                    profile.credit_coins(coins);
                    self.log.push(log_event!("win", "player"));
                    self.log.push(log_event!("coins", coins));
                    self.state = BattleState::Over(BattleOutcome::Victory);
                }
            }
        } else {
            self.state = BattleState::CpuTurn;
        }
        self.pending = false;
        Ok(())
    }

    fn player_guard(&mut self) -> Result<()> {
        let (name, _, _) = self.active_player()?;
        self.pending = true;
        self.guarding = true;
        self.log.push(log_event!("guard", format!("mon:{name}")));
        self.state = BattleState::CpuTurn;
        self.pending = false;
        Ok(())
    }

    fn player_use_item(
        &mut self,
        profile: &mut Profile,
        item: Id,
        item_data: ItemData,
    ) -> Result<()> {
        self.active_player()?;
        self.pending = true;
        profile.consume_item(&item);
        if let Some(combatant) = self.player_team.active_mut() {
            let restored = combatant.apply_heal(item_data.effect);
            let name = combatant.name().to_owned();
            let hp = combatant.hp();
            self.log.push(log_event!(
                "item",
                format!("mon:{name}"),
                format!("item:{}", item_data.name),
                format!("restored:{restored}"),
                format!("hp:{hp}"),
            ));
        }
        self.state = BattleState::CpuTurn;
        self.pending = false;
        Ok(())
    }

    /// Advances the CPU's turn. The CPU always attacks the active player
    /// combatant.
    ///
    /// Fails, mutating nothing, if it is not the CPU's turn or the battle
    /// is over.
    pub fn advance_cpu_turn(&mut self) -> Result<()> {
        self.ensure_actionable()?;
        if self.state != BattleState::CpuTurn {
            return Err(NotCpuTurnError.into());
        }
        let (attacker_name, attack, attacker_attribute) = self.active_cpu()?;
        let (defender_name, _, defender_attribute) = self.active_player()?;
        let damage = compute_damage(
            &self.chart,
            &DamageInput {
                attack,
                attacker_attribute,
                defender_attribute,
                difficulty: self.difficulty,
                cpu_attacker: true,
            },
        );

        self.pending = true;
        // Guarding halves exactly this attack and is consumed by it,
        // whether or not the defender survives.
        let applied = if self.guarding {
            damage.value / 2
        } else {
            damage.value
        };
        self.log.push(log_event!(
            "attack",
            "actor:cpu",
            format!("mon:{attacker_name}"),
            format!("target:{defender_name}"),
            format!("damage:{applied}"),
        ));
        if damage.advantage != Advantage::Neutral {
            self.log.push(log_event!("advantage", damage.advantage));
        }
        if self.guarding {
            self.log
                .push(log_event!("guarded", format!("absorbed:{}", damage.value - applied)));
            self.guarding = false;
        }

        let mut fainted = false;
        if let Some(defender) = self.player_team.active_mut() {
            defender.apply_damage(applied);
            fainted = defender.fainted();
        }
        if fainted {
            self.log.push(log_event!(
                "faint",
                "actor:player",
                format!("mon:{defender_name}"),
            ));
            match self.player_team.advance() {
                Some(next) => {
                    let name = next.name().to_owned();
                    self.log
                        .push(log_event!("send", "actor:player", format!("mon:{name}")));
                    self.state = BattleState::PlayerTurn;
                }
                None => {
                    self.log.push(log_event!("win", "cpu"));
                    self.state = BattleState::Over(BattleOutcome::Defeat);
                }
            }
        } else {
            self.state = BattleState::PlayerTurn;
        }
        self.pending = false;
        Ok(())
    }
}
