//! End-to-end flows over the JSON file store.

use std::path::Path;
use std::sync::Arc;

use axismundi_domain::{ActorData, ItemData, KeyLocalizer, LoadTier};
use axismundi_engine::infrastructure::config::EngineConfig;
use axismundi_engine::infrastructure::json::{CatalogLocalizer, JsonActorRepository};
use axismundi_engine::infrastructure::ports::ActorRepo;
use axismundi_engine::use_cases::{DeriveError, SheetContext, SheetError};
use axismundi_engine::App;
use serde_json::json;

fn write_actor(dir: &Path, key: &str, value: serde_json::Value) {
    let json = serde_json::to_string_pretty(&value).expect("fixture serializes");
    std::fs::write(dir.join(key), json).expect("write fixture");
}

fn app_for(dir: &Path) -> App {
    App::new(
        Arc::new(JsonActorRepository::new(dir)),
        Arc::new(KeyLocalizer),
        true,
    )
}

#[test]
fn derive_with_write_persists_monster_saves() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_actor(
        dir.path(),
        "troll.json",
        json!({
            "name": "Troll",
            "system": {
                "type": "monster",
                "hitDice": { "number": 6.5, "die": "d8" },
                "monsterSaves": 6
            }
        }),
    );
    let app = app_for(dir.path());

    app.use_cases
        .derive
        .execute_and_save("troll.json")
        .expect("derives and saves");

    let stored = JsonActorRepository::new(dir.path())
        .load("troll.json")
        .expect("reload");
    let ActorData::Monster(monster) = stored.data else {
        panic!("expected monster");
    };
    assert_eq!(monster.attack_bonus, 6);
    assert_eq!(monster.saves.as_row(), [12, 11, 13, 13, 14]);
}

#[test]
fn derive_without_write_leaves_file_untouched() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cog = json!({
        "name": "Cog",
        "system": {
            "type": "vehicle",
            "hitPoints": {
                "forward": { "value": 0, "max": 20 },
                "aft": { "value": 20, "max": 20 },
                "port": { "value": 30, "max": 30 },
                "starboard": { "value": 30, "max": 30 }
            },
            "move": { "value": 9 }
        }
    });
    write_actor(dir.path(), "cog.json", cog);
    let before = std::fs::read_to_string(dir.path().join("cog.json")).expect("read");

    let actor = app_for(dir.path())
        .use_cases
        .derive
        .execute("cog.json")
        .expect("derives");
    let ActorData::Vehicle(vehicle) = actor.data else {
        panic!("expected vehicle");
    };
    assert_eq!(vehicle.hit_points.value, 80);
    assert_eq!(vehicle.hit_points.max, 100);
    assert_eq!(vehicle.movement.current, 4);

    let after = std::fs::read_to_string(dir.path().join("cog.json")).expect("read");
    assert_eq!(before, after);
}

#[test]
fn stronghold_without_workers_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_actor(
        dir.path(),
        "keep.json",
        json!({ "name": "Keep", "system": { "type": "stronghold", "workers": 0 } }),
    );
    let err = app_for(dir.path())
        .use_cases
        .derive
        .execute_and_save("keep.json")
        .expect_err("zero workers");
    assert!(matches!(err, DeriveError::Domain(_)));
}

#[test]
fn seed_then_rate_then_sheet() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_actor(
        dir.path(),
        "iria.json",
        json!({
            "name": "Iria",
            "system": {
                "type": "character",
                "abilities": {
                    "str": { "value": 7 },
                    "dex": { "value": 16 },
                    "wis": { "value": 13 }
                },
                "money": { "gp": 120, "sp": 80 }
            },
            "items": [
                { "name": "Rope", "system": { "type": "item", "weight": 2, "quantity": 3 } },
                {
                    "name": "Dagger",
                    "system": { "type": "weapon", "weight": 1, "prepared": true, "damage": "1d4" }
                }
            ]
        }),
    );
    let app = app_for(dir.path());

    let seeded = app.use_cases.skills.seed("iria.json").expect("seeds");
    assert_eq!(seeded.added, 7);

    let rated = app.use_cases.skills.rate("iria.json").expect("rates");
    let sigilo = rated
        .items
        .iter()
        .find(|item| item.name == "Sigilo")
        .expect("seeded skill");
    let ItemData::Pericia(skill) = &sigilo.data else {
        panic!("expected skill");
    };
    // base 2 + dex 16 bonus 2
    assert_eq!(skill.rating, 4);

    let sheet = app.use_cases.sheet.get_sheet("iria.json").expect("sheet");
    let inventory = sheet.inventory.expect("characters list items");
    assert_eq!(inventory.basic_skills.len(), 7);
    assert_eq!(inventory.weapons.len(), 1);

    // 6 from the rope, 2 for 200 coins; the dagger is prepared
    let weight = sheet.weight.expect("characters have weights");
    assert_eq!(weight.carried, 8);
    assert_eq!(weight.prepared, 1);
    let load = sheet.load.expect("characters have a load");
    assert_eq!(load.tier, LoadTier::Medium);

    assert_eq!(sheet.weapon_rolls[0].attack, "d20+@str.bonus+0+0");
    assert_eq!(sheet.roll_data.number("@dex.bonus"), Some(2.0));
}

#[test]
fn bad_spell_level_fails_the_sheet_but_not_derivation() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_actor(
        dir.path(),
        "mage.json",
        json!({
            "name": "Mage",
            "system": { "type": "character" },
            "items": [ { "name": "Wish", "system": { "type": "spell", "spellLevel": 9 } } ]
        }),
    );
    let app = app_for(dir.path());
    app.use_cases.derive.execute("mage.json").expect("derives");
    let err = app
        .use_cases
        .sheet
        .get_sheet("mage.json")
        .expect_err("level 9 has no bucket");
    assert!(matches!(err, SheetError::Domain(_)));
}

#[test]
fn missing_actor_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = app_for(dir.path())
        .use_cases
        .sheet
        .get_roll_data("nobody.json")
        .expect_err("no file");
    assert!(matches!(err, SheetError::Repo(e) if e.is_not_found()));
}

#[test]
fn app_from_config_uses_label_catalog() {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = dir.path().join("es.json");
    std::fs::write(
        &catalog,
        r#"{"AXISMUNDIRPG": {"Height": "Altura", "Cost": "Coste", "BuildTime": "Tiempo"}}"#,
    )
    .expect("write catalog");
    write_actor(
        dir.path(),
        "keep.json",
        json!({ "name": "Keep", "system": { "type": "stronghold" } }),
    );

    let config = EngineConfig {
        locale_file: Some(catalog.clone()),
        ..EngineConfig::default().with_data_dir(dir.path())
    };
    let app = App::from_config(&config).expect("configured");
    let sheet = app.use_cases.sheet.get_sheet("keep.json").expect("sheet");
    assert_eq!(sheet.labels.stronghold["height"], "Altura");
    assert_eq!(sheet.labels.stronghold["buildTime"], "Tiempo");

    let catalog = CatalogLocalizer::load(&catalog).expect("catalog loads");
    assert_eq!(catalog.len(), 3);
}

#[test]
fn sloppy_coin_counts_still_build_a_sheet() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_actor(
        dir.path(),
        "pobre.json",
        json!({
            "name": "Pobre",
            "system": {
                "type": "character",
                "money": { "pp": -5, "gp": "", "ep": "150", "sp": 2.5, "cp": "mucho" }
            }
        }),
    );
    let sheet = app_for(dir.path())
        .use_cases
        .sheet
        .get_sheet("pobre.json")
        .expect("sheet builds");
    let ActorData::Character(character) = &sheet.actor.data else {
        panic!("expected character");
    };
    assert_eq!(character.money.coin_count(), 152);
    // 152 coins weigh 1
    let weight = sheet.weight.expect("characters have weights");
    assert_eq!(weight.carried, 1);
}

#[test]
fn advanced_rating_survives_ability_changes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sabia = |int: i32| {
        json!({
            "name": "Sabia",
            "system": { "type": "character", "abilities": { "int": { "value": int } } },
            "items": [
                {
                    "name": "Alquimia",
                    "system": {
                        "type": "pericia",
                        "advanced": true,
                        "baseValue": 1,
                        "ability": "int"
                    }
                }
            ]
        })
    };
    write_actor(dir.path(), "sabia.json", sabia(16));
    let app = app_for(dir.path());
    let alchemy = |sheet: &SheetContext| {
        sheet
            .actor
            .items
            .iter()
            .find_map(|item| match &item.data {
                ItemData::Pericia(skill) => Some((skill.rating, skill.rating_calculated)),
                _ => None,
            })
            .expect("skill")
    };

    let first = app.use_cases.sheet.get_sheet("sabia.json").expect("sheet");
    assert_eq!(alchemy(&first), (3, true));

    let repo = JsonActorRepository::new(dir.path());
    let mut stored = repo.load("sabia.json").expect("reload");
    if let ActorData::Character(character) = &mut stored.data {
        character.abilities.int.value = 3;
    }
    repo.save("sabia.json", &stored).expect("save");

    let second = app.use_cases.sheet.get_sheet("sabia.json").expect("sheet");
    assert_eq!(alchemy(&second), (3, true));
}
