use teampaste::{ErrorKind, Pokemon, Showdown, StatSpread};

#[test]
fn read_name_line_with_everything() {
    let p = Pokemon::from_showdown(
        "Smogon (Koffing) (F) @ Eviolite\nAbility: Levitate\nBold Nature\n- Haze",
    )
    .unwrap();
    assert_eq!(p.nickname, "Smogon");
    assert_eq!(p.name, "Koffing");
    assert_eq!(p.gender, "F");
    assert_eq!(p.item, "Eviolite");
}

#[test]
fn read_too_few_lines() {
    let err = Pokemon::from_showdown("Koffing\nAbility: Levitate\n\n").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TooFewLines { found: 2 }));
}

#[test]
fn read_invalid_stat_line() {
    let err = Pokemon::from_showdown("Koffing\nAbility: Levitate\nEVs: 252 HP / lots Def\n- Haze")
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidNumber { .. }));
    assert!(err.to_string().contains("lots"));
}

#[test]
fn read_individual_values_override_only_named_stats() {
    let p = Pokemon::from_showdown(
        "Thundurus @ Life Orb
         Ability: Defiant
         IVs: 0 SpA / 20 Spe
         Jolly Nature
         - Fly",
    )
    .unwrap();
    assert_eq!(
        p.ivs,
        StatSpread {
            spa: 0,
            spe: 20,
            ..StatSpread::IV_DEFAULT
        }
    );
    assert_eq!(p.evs, StatSpread::EV_DEFAULT);
}

#[test]
fn read_tilde_moves_and_crlf() {
    let p = Pokemon::from_showdown("Urshifu\r\nAbility: Unseen Fist\r\n~ Detect\r\n~ Wicked Blow\r\n")
        .unwrap();
    assert_eq!(p.moves, vec!["Detect", "Wicked Blow"]);
}

#[test]
fn write_then_read() {
    let zacian = Pokemon {
        name: String::from("Zacian"),
        nickname: String::from("Doggo"),
        gender: String::new(),
        item: String::from("Rusted Sword"),
        ability: String::from("Intrepid Sword"),
        level: 50,
        shiny: true,
        happiness: 70,
        nature: String::from("Adamant"),
        evs: StatSpread {
            hp: 252,
            atk: 108,
            def: 4,
            spa: 0,
            spd: 68,
            spe: 76,
        },
        ivs: StatSpread {
            spa: 0,
            ..StatSpread::IV_DEFAULT
        },
        moves: vec![
            String::from("Iron Head"),
            String::from("Substitute"),
            String::from("Sacred Sword"),
            String::from("Protect"),
        ],
    };

    let paste = zacian.to_showdown().unwrap();
    assert_eq!(
        paste,
        "Doggo (Zacian) @ Rusted Sword
Level: 50
Ability: Intrepid Sword
Shiny: Yes
Happiness: 70
EVs: 252 HP / 108 Atk / 4 Def / 68 SpD / 76 Spe
Adamant Nature
IVs: 0 SpA
- Iron Head
- Substitute
- Sacred Sword
- Protect
"
    );

    let back = Pokemon::from_showdown(&paste).unwrap();
    assert_eq!(back, zacian);
}

#[test]
fn write_without_level_drops_happiness() {
    let p = Pokemon {
        name: String::from("Koffing"),
        ability: String::from("Levitate"),
        nature: String::from("Bold"),
        happiness: 100,
        ivs: StatSpread::IV_DEFAULT,
        moves: vec![String::from("Haze")],
        ..Default::default()
    };

    let back = Pokemon::from_showdown(&p.to_showdown().unwrap()).unwrap();
    assert_eq!(back.happiness, 255);
    assert_eq!(Pokemon { happiness: 100, ..back }, p);
}

#[test]
fn write_invalid_pokemon() {
    let p = Pokemon {
        name: String::from("Koffing"),
        ..Default::default()
    };
    let err = p.to_showdown().unwrap_err();
    assert_eq!(err.to_string(), "ability is required");
}
