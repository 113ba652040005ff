use teampaste::{text::split_blocks, ErrorKind, Showdown, StatSpread, Team, ValidationError};

const VGC2021: &str = include_str!("fixtures/vgc2021.txt");

const EXAMPLE_TEAM: &str = "=== [gen7] Folder 1/Example Team ===

    Smogon (Koffing) (F) @ Eviolite
    Level: 5
    Ability: Levitate
    Shiny: Yes
    Happiness: 255
    EVs: 36 HP / 236 Def / 236 SpD
    IVs: 31 HP / 30 Atk / 31 SpA / 30 SpD / 31 Spe
    Bold Nature
    - Will-O-Wisp
    - Pain Split
    - Sludge Bomb
    - Fire Blast

    Venusaur-Gmax @ Coba Berry
    Ability: Chlorophyll
    Level: 50
    EVs: 156 HP / 4 Def / 252 SpA / 4 SpD / 92 Spe
    Modest Nature
    IVs: 0 Atk
    - Frenzy Plant
    - Sludge Bomb
    - Earth Power
    - Sleep Powder
    ";

#[test]
fn split_fixture_into_blocks() {
    let blocks = split_blocks(VGC2021);
    assert_eq!(blocks.len(), 7);
    assert_eq!(blocks[0], vec!["=== [gen8vgc2021] Untitled 10 ==="]);
    assert_eq!(blocks[6][0], "Zacian @ Rusted Sword");
}

#[test]
fn read_team_with_folder() {
    let team = Team::from_showdown(EXAMPLE_TEAM).unwrap();
    assert_eq!(team.format, "gen7");
    assert_eq!(team.folder, "Folder 1");
    assert_eq!(team.name, "Example Team");
    assert_eq!(team.pokemon.len(), 2);

    let koffing = &team.pokemon[0];
    assert_eq!(koffing.name, "Koffing");
    assert_eq!(koffing.nickname, "Smogon");
    assert_eq!(koffing.gender, "F");
    assert_eq!(koffing.item, "Eviolite");
    assert_eq!(koffing.ability, "Levitate");
    assert_eq!(koffing.level, 5);
    assert!(koffing.shiny);
    assert_eq!(koffing.happiness, 255);
    assert_eq!(koffing.nature, "Bold");
    assert_eq!(
        koffing.evs,
        StatSpread {
            hp: 36,
            atk: 0,
            def: 236,
            spa: 0,
            spd: 236,
            spe: 0
        }
    );
    assert_eq!(
        koffing.ivs,
        StatSpread {
            hp: 31,
            atk: 30,
            def: 31,
            spa: 31,
            spd: 30,
            spe: 31
        }
    );
    assert_eq!(
        koffing.moves,
        vec!["Will-O-Wisp", "Pain Split", "Sludge Bomb", "Fire Blast"]
    );

    let venusaur = &team.pokemon[1];
    assert_eq!(venusaur.name, "Venusaur-Gmax");
    assert_eq!(venusaur.nickname, "");
    assert_eq!(venusaur.item, "Coba Berry");
    assert_eq!(venusaur.level, 50);
    assert_eq!(venusaur.happiness, 255);
    assert_eq!(venusaur.nature, "Modest");
    assert_eq!(
        venusaur.ivs,
        StatSpread {
            atk: 0,
            ..StatSpread::IV_DEFAULT
        }
    );

    assert_eq!(team.validate(), Ok(()));
}

#[test]
fn read_fixture_team() {
    let team: Team = VGC2021.parse().unwrap();
    assert_eq!(team.format, "gen8vgc2021");
    assert_eq!(team.folder, "");
    assert_eq!(team.name, "Untitled 10");

    let names: Vec<_> = team.pokemon.iter().map(|x| x.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Charizard-Gmax",
            "Venusaur-Gmax",
            "Tapu Fini",
            "Thundurus",
            "Urshifu",
            "Zacian"
        ]
    );
    assert_eq!(team.pokemon[2].level, 0);
    assert_eq!(team.pokemon[2].moves[3], "Nature's Madness");
    assert_eq!(team.validate(), Ok(()));
}

#[test]
fn read_team_without_header() {
    let paste = "Charizard-Gmax @ Wacan Berry
        Ability: Solar Power
        Level: 50
        EVs: 4 HP / 252 SpA / 252 Spe
        Timid Nature
        IVs: 0 Atk
        - Blast Burn
        - Hurricane
        - Ancient Power
        - Protect
        ";
    let team = Team::from_showdown(paste).unwrap();
    assert_eq!(team.name, "");
    assert_eq!(team.format, "");
    assert_eq!(team.pokemon.len(), 1);
    assert_eq!(team.validate(), Ok(()));
}

#[test]
fn read_team_without_name_fails() {
    let paste = " @ Sitrus Berry
        Ability: Misty Surge
        EVs: 252 HP / 68 Def / 4 SpA / 116 SpD / 68 Spe
        Calm Nature
        IVs: 0 Atk
        - Moonblast
        ";
    let err = Team::from_showdown(paste).unwrap_err();
    assert_eq!(err.member_index(), Some(0));
}

#[test]
fn read_team_reports_failing_block() {
    let mut broken: Vec<_> = VGC2021.split("\n\n").collect();
    broken[3] = "Tapu Fini @ Sitrus Berry\nAbility: Misty Surge";
    let paste = broken.join("\n\n");

    let err = Team::from_showdown(&paste).unwrap_err();
    assert_eq!(err.member_index(), Some(2));
    match err.kind() {
        ErrorKind::Member { index, error } => {
            assert_eq!(*index, 2);
            assert!(matches!(error.kind(), ErrorKind::TooFewLines { found: 2 }));
        }
        x => panic!("unexpected error: {:?}", x),
    }
    assert!(err.to_string().contains("index: 2"));
}

#[test]
fn read_empty_paste() {
    let team = Team::from_showdown("\n   \n").unwrap();
    assert!(team.pokemon.is_empty());
    assert_eq!(team.validate(), Err(ValidationError::NoMembers));
}

#[test]
fn write_team_appends_each_block() {
    let team = Team::from_showdown(EXAMPLE_TEAM).unwrap();
    let out = team.to_showdown().unwrap();
    let expected = "=== [gen7] Folder 1/Example Team ===

Smogon (Koffing) (F) @ Eviolite
Level: 5
Ability: Levitate
Shiny: Yes
Happiness: 255
EVs: 36 HP / 236 Def / 236 SpD
Bold Nature
IVs: 30 Atk / 30 SpD
- Will-O-Wisp
- Pain Split
- Sludge Bomb
- Fire Blast
Venusaur-Gmax @ Coba Berry
Level: 50
Ability: Chlorophyll
Happiness: 255
EVs: 156 HP / 4 Def / 252 SpA / 4 SpD / 92 Spe
Modest Nature
IVs: 0 Atk
- Frenzy Plant
- Sludge Bomb
- Earth Power
- Sleep Powder
";
    assert_eq!(out, expected);
}

#[test]
fn write_invalid_team_member() {
    let mut team = Team::from_showdown(VGC2021).unwrap();
    team.pokemon[4].evs.atk = 253;

    let err = team.to_showdown().unwrap_err();
    assert_eq!(err.member_index(), Some(4));
    assert!(matches!(
        err.validation(),
        Some(ValidationError::EffortValue { value: 253, .. })
    ));
}
