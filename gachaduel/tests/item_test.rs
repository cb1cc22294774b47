use gachaduel::{
    Profile,
    battle::{
        BattleBuilder,
        BattleSession,
        BattleState,
        PlayerAction,
    },
    error::{
        ItemUnavailableError,
        NotFoundError,
    },
};
use gachaduel_data::{
    Difficulty,
    Id,
    LocalDataStore,
};

/// All Wind, all matchups neutral: the hero chips 5 damage, the slimes hit
/// back for 10.
fn catalog() -> LocalDataStore {
    LocalDataStore::from_json(
        r#"{
            "characters": {
                "hero": { "name": "Hero", "hp": 100, "attack": 5, "attribute": "Wind", "rarity": "UR" },
                "herob": { "name": "Hero", "hp": 100, "attack": 5, "attribute": "Wind", "rarity": "UR" },
                "heroc": { "name": "Hero", "hp": 100, "attack": 5, "attribute": "Wind", "rarity": "UR" },
                "slimea": { "name": "Slime", "hp": 40, "attack": 10, "attribute": "Wind", "rarity": "N" },
                "slimeb": { "name": "Slime", "hp": 40, "attack": 10, "attribute": "Wind", "rarity": "N" },
                "slimec": { "name": "Slime", "hp": 40, "attack": 10, "attribute": "Wind", "rarity": "N" }
            },
            "items": {
                "ohagi": { "name": "Ohagi", "effect": { "type": "heal_fixed", "amount": 40 } },
                "cup": { "name": "Grail", "effect": { "type": "heal_full" } }
            }
        }"#,
    )
    .unwrap()
}

fn make_battle(data: &LocalDataStore) -> (BattleSession, Profile) {
    let mut profile = Profile::new(0);
    for id in ["hero", "herob", "heroc"] {
        profile.add_character(Id::from(id));
    }
    profile.add_item(Id::from("ohagi"), 1);
    profile.add_item(Id::from("cup"), 1);
    let battle = BattleBuilder::new()
        .with_seed(3)
        .with_difficulty(Difficulty::Normal)
        .with_team(["hero", "herob", "heroc"])
        .build(data, &profile)
        .unwrap();
    (battle, profile)
}

fn take_damage(
    battle: &mut BattleSession,
    data: &LocalDataStore,
    profile: &mut Profile,
    rounds: usize,
) {
    for _ in 0..rounds {
        battle
            .submit_player_action(data, profile, PlayerAction::Attack)
            .unwrap();
        battle.advance_cpu_turn().unwrap();
    }
}

#[test]
fn fixed_heal_restores_hp_and_consumes_the_item() {
    let data = catalog();
    let (mut battle, mut profile) = make_battle(&data);

    take_damage(&mut battle, &data, &mut profile, 4);
    assert_eq!(battle.player_team().active().unwrap().hp(), 60);

    battle
        .submit_player_action(
            &data,
            &mut profile,
            PlayerAction::UseItem {
                item: Id::from("ohagi"),
            },
        )
        .unwrap();
    assert_eq!(battle.player_team().active().unwrap().hp(), 100);
    assert_eq!(profile.item_count(&Id::from("ohagi")), 0);
    // Using an item hands the turn to the CPU.
    assert_eq!(battle.state(), BattleState::CpuTurn);
}

#[test]
fn fixed_heal_clamps_to_max_hp() {
    let data = catalog();
    let (mut battle, mut profile) = make_battle(&data);

    take_damage(&mut battle, &data, &mut profile, 1);
    assert_eq!(battle.player_team().active().unwrap().hp(), 90);

    battle
        .submit_player_action(
            &data,
            &mut profile,
            PlayerAction::UseItem {
                item: Id::from("ohagi"),
            },
        )
        .unwrap();
    assert_eq!(battle.player_team().active().unwrap().hp(), 100);
}

#[test]
fn full_heal_restores_to_max_hp() {
    let data = catalog();
    let (mut battle, mut profile) = make_battle(&data);

    take_damage(&mut battle, &data, &mut profile, 6);
    assert_eq!(battle.player_team().active().unwrap().hp(), 40);

    battle
        .submit_player_action(
            &data,
            &mut profile,
            PlayerAction::UseItem {
                item: Id::from("cup"),
            },
        )
        .unwrap();
    let active = battle.player_team().active().unwrap();
    assert_eq!(active.hp(), active.max_hp());
    assert_eq!(profile.item_count(&Id::from("cup")), 0);
}

#[test]
fn using_an_item_with_zero_inventory_is_rejected_without_mutation() {
    let data = catalog();
    let (mut battle, mut profile) = make_battle(&data);

    take_damage(&mut battle, &data, &mut profile, 2);
    battle
        .submit_player_action(
            &data,
            &mut profile,
            PlayerAction::UseItem {
                item: Id::from("ohagi"),
            },
        )
        .unwrap();
    battle.advance_cpu_turn().unwrap();

    let hp = battle.player_team().active().unwrap().hp();
    let error = battle
        .submit_player_action(
            &data,
            &mut profile,
            PlayerAction::UseItem {
                item: Id::from("ohagi"),
            },
        )
        .unwrap_err();
    assert!(error.downcast_ref::<ItemUnavailableError>().is_some());
    assert_eq!(battle.state(), BattleState::PlayerTurn);
    assert_eq!(battle.player_team().active().unwrap().hp(), hp);
    assert_eq!(profile.item_count(&Id::from("ohagi")), 0);
}

#[test]
fn using_an_unknown_item_is_rejected() {
    let data = catalog();
    let (mut battle, mut profile) = make_battle(&data);

    let error = battle
        .submit_player_action(
            &data,
            &mut profile,
            PlayerAction::UseItem {
                item: Id::from("potion"),
            },
        )
        .unwrap_err();
    assert!(error.downcast_ref::<NotFoundError>().is_some());
    assert_eq!(battle.state(), BattleState::PlayerTurn);
}

#[test]
fn item_use_is_logged() {
    let data = catalog();
    let (mut battle, mut profile) = make_battle(&data);

    take_damage(&mut battle, &data, &mut profile, 4);
    battle.log_mut().read_out().count();
    battle
        .submit_player_action(
            &data,
            &mut profile,
            PlayerAction::UseItem {
                item: Id::from("ohagi"),
            },
        )
        .unwrap();
    assert_eq!(
        battle.log_mut().read_out().collect::<Vec<_>>(),
        vec!["item|mon:Hero|item:Ohagi|restored:40|hp:100"],
    );
}
