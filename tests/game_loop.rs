mod common;

use common::*;
use platformer::{
    Announcement,
    Cue,
    Fault,
    Phase,
    Step,
};

/// Shortest input scripts that clear each level from the start position.
/// Only the final step of each script takes the last coin.
const LEVEL_SCRIPTS: [&str; 5] = [
    "U....RRRRRRRR/R.LRRRRRRRRRRRRRRRRRRRRRRR",
    "RR/RRRRRRRRRRRRRRRRRRRRRRR/RRRRRRRRRRRRRRRRR",
    "ULRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRR/RR",
    "RRRRRRRRRRRR/..R.LLLLLLLL/RRRRRRRRRRRRRRRRRRRRRRRRRRRRRRLLLLLL.....",
    "/RRRRRRRRRRRRRRRRRRR./RRRRRRRRRRRRRRRRRRRRRRRRRRR",
];

fn ground_row_lit(rig: &Rig) -> bool {
    let frame = rig.game.screen().last();
    (0..128).all(|x| frame.pixel(x, 50))
}

#[test]
fn test_opening_announces_level_one() {
    let mut rig = Rig::new();
    let step = rig.open();

    assert_eq!(step, Step::Announced(Announcement::LevelStart(1)));
    assert_eq!(step.pause().map(|p| p.to_millis()), Some(2000));
    assert_eq!(rig.game.feedback().cues, [Cue::LevelStart(1)]);
    assert_eq!(rig.game.screen().frames.len(), 1);
    assert!(!ground_row_lit(&rig));
}

#[test]
fn test_idle_ticks_render_play_screen() {
    let mut rig = Rig::new();
    rig.open();

    let step = rig.tick();
    assert_eq!(step, Step::Played(Default::default()));
    assert_eq!(step.pause(), None);
    assert!(ground_row_lit(&rig));

    let player = rig.game.session().player();
    assert_eq!((player.body.x, player.body.y), (20.0, 42.0));
    assert!(rig.game.screen().last().pixel(20, 42));
}

#[test]
fn test_jump_onto_first_ledge_collects_coin() {
    let mut rig = Rig::new();
    rig.open();

    rig.stick.push(UP_RIGHT);
    rig.stick.push_many(RIGHT, 9);

    let Step::Played(first) = rig.tick() else {
        panic!("expected a played tick");
    };
    assert!(first.jumped);
    rig.run(9);

    let session = rig.game.session();
    let player = session.player();
    assert_eq!(player.score, 100);
    assert_eq!(player.body.x, 40.0);
    assert_eq!(player.body.y, 32.0);
    assert!(!player.is_jumping);
    assert!(session.level().coins[0].is_collected());
    assert!(
        rig.game
            .feedback()
            .cues
            .contains(&Cue::Coin {
                collected: 1,
                total: 3
            })
    );
}

#[test]
fn test_jump_cooldown_through_the_loop() {
    let mut rig = Rig::new();
    rig.open();

    // Hop onto the first ledge; it lands 180 ms after the jump.
    rig.stick.push(UP_RIGHT);
    rig.stick.push_many(RIGHT, 9);
    rig.run(10);
    assert!(!rig.game.session().player().is_jumping);

    // 200 ms since the accepted jump.
    rig.stick.push(UP);
    let Step::Played(early) = rig.tick() else {
        panic!("expected a played tick");
    };
    assert!(!early.jumped);
    assert_eq!(rig.game.session().player().vy, 0.0);

    rig.stick.push_many(NEUTRAL, 2);
    rig.run(2);

    // 260 ms.
    rig.stick.push(UP);
    let Step::Played(late) = rig.tick() else {
        panic!("expected a played tick");
    };
    assert!(late.jumped);
    assert!(rig.game.session().player().is_jumping);
}

#[test]
fn test_walking_stays_on_screen() {
    let mut rig = Rig::new();
    rig.open();

    rig.stick.push_many(RIGHT, 200);
    rig.run(200);
    assert_eq!(rig.game.session().player().body.x, 120.0);

    rig.stick.push_many(LEFT, 200);
    rig.run(200);
    assert_eq!(rig.game.session().player().body.x, 0.0);
    assert!(!rig.game.session().player().facing_right);
}

#[test]
fn test_input_fault_skips_tick() {
    let mut rig = Rig::new();
    rig.open();
    rig.stick.fail_next();
    rig.stick.push(RIGHT);

    let step = rig.tick();
    assert_eq!(step, Step::Faulted(Fault::Input));
    assert_eq!(step.pause().map(|p| p.to_millis()), Some(1000));
    assert_eq!(rig.game.session().player().body.x, 20.0);
    assert!(!ground_row_lit(&rig));

    assert!(matches!(rig.tick(), Step::Played(_)));
    assert_eq!(rig.game.session().player().body.x, 22.0);
    assert!(ground_row_lit(&rig));
}

#[test]
fn test_display_fault_keeps_simulation() {
    let mut rig = Rig::new();
    rig.open();
    let presented = rig.game.screen().frames.len();

    rig.screen_failures.set(1);
    rig.stick.push(RIGHT);
    assert_eq!(rig.tick(), Step::Faulted(Fault::Display));

    // The move was simulated even though its frame never reached the screen;
    // the diagnostic did.
    assert_eq!(rig.game.session().player().body.x, 22.0);
    assert_eq!(rig.game.screen().frames.len(), presented + 1);
    assert!(!ground_row_lit(&rig));

    rig.stick.push(RIGHT);
    assert!(matches!(rig.tick(), Step::Played(_)));
    assert_eq!(rig.game.session().player().body.x, 24.0);
}

#[test]
fn test_diagnostic_lost_when_screen_stays_down() {
    let mut rig = Rig::new();
    rig.open();
    let presented = rig.game.screen().frames.len();

    rig.screen_failures.set(2);
    assert_eq!(rig.tick(), Step::Faulted(Fault::Display));
    assert_eq!(rig.game.screen().frames.len(), presented);

    assert!(matches!(rig.tick(), Step::Played(_)));
}

#[test]
fn test_level_one_clear_advances_to_level_two() {
    let mut rig = Rig::new();
    rig.open();

    let script = LEVEL_SCRIPTS[0];
    rig.stick.push_script(script);
    for _ in 1..script.len() {
        assert!(matches!(rig.tick(), Step::Played(_)));
    }
    assert_eq!(rig.game.session().player().score, 200);

    let step = rig.tick();
    assert_eq!(step, Step::Announced(Announcement::LevelStart(2)));
    assert!(!ground_row_lit(&rig));

    let session = rig.game.session();
    assert_eq!(session.phase(), Phase::Playing(2));
    assert_eq!(session.level().coins.len(), 4);
    assert!(session.level().coins.iter().all(|c| !c.is_collected()));
    let player = session.player();
    assert_eq!(player.score, 300);
    assert_eq!(player.level, 2);
    assert_eq!((player.body.x, player.body.y), (20.0, 42.0));
    assert_eq!(player.vy, 0.0);

    let cues = &rig.game.feedback().cues;
    assert_eq!(
        &cues[cues.len() - 2..],
        [
            Cue::Coin {
                collected: 3,
                total: 3
            },
            Cue::LevelStart(2)
        ]
    );

    assert!(matches!(rig.tick(), Step::Played(_)));
    assert!(ground_row_lit(&rig));
}

#[test]
fn test_full_playthrough_wraps_to_level_one() {
    let mut rig = Rig::new();
    rig.open();

    for (index, script) in LEVEL_SCRIPTS.iter().enumerate() {
        let number = u8::try_from(index + 1).unwrap();
        assert_eq!(rig.game.session().phase(), Phase::Playing(number));

        rig.stick.push_script(script);
        for _ in 1..script.len() {
            assert!(matches!(rig.tick(), Step::Played(_)), "level {number}");
        }

        let expected = if number < 5 {
            Announcement::LevelStart(number + 1)
        } else {
            Announcement::GameComplete
        };
        assert_eq!(rig.tick(), Step::Announced(expected), "level {number}");
    }

    assert_eq!(rig.game.session().phase(), Phase::GameComplete);
    assert_eq!(rig.game.session().player().score, 2100);

    let step = rig.tick();
    assert_eq!(step, Step::Announced(Announcement::LevelStart(1)));
    assert_eq!(step.pause().map(|p| p.to_millis()), Some(2000));

    let session = rig.game.session();
    assert_eq!(session.phase(), Phase::Playing(1));
    assert_eq!(session.player().score, 0);
    assert_eq!(session.player().level, 1);
    assert!(session.level().coins.iter().all(|c| !c.is_collected()));

    let cues = &rig.game.feedback().cues;
    let starts: Vec<u8> = cues
        .iter()
        .filter_map(|cue| match cue {
            Cue::LevelStart(n) => Some(*n),
            _ => None,
        })
        .collect();
    assert_eq!(starts, [1, 2, 3, 4, 5, 1]);
    assert_eq!(cues.iter().filter(|c| **c == Cue::GameComplete).count(), 1);
    assert_eq!(cues[cues.len() - 2], Cue::GameComplete);
}
