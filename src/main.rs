//! Headless match-3 runner (default binary).
//!
//! Plays a full round on its own: every turn it tries adjacent swaps in random order
//! until the engine accepts one, then prints the settled board. Time mode advances a
//! simulated clock by three seconds per turn.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use match3::config::AppConfig;
use match3::core::BoardRng;
use match3::engine::{Effect, Resolver};
use match3::render::{legend, print_board};
use match3::session::{GameMode, Session};
use match3::types::Coord;

/// Simulated wall-clock time per turn
const TURN_MS: u64 = 3_000;

/// Stop a round that somehow never runs out
const MAX_TURNS: u32 = 1_000;

fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::load().context("failed to load configuration")?;
    let seed = config
        .seed
        .unwrap_or_else(|| BoardRng::from_entropy().seed());
    let mut resolver =
        Resolver::new(config.engine, seed).context("invalid engine configuration")?;
    let mut session = Session::new(config.mode);

    println!(
        "match3 - {} mode, {} theme, seed {}",
        config.mode.as_str(),
        config.theme.name,
        seed
    );
    println!("{}", legend(config.theme));
    print_board(resolver.grid())?;

    let mut picker = StdRng::seed_from_u64(seed);
    let mut swaps = adjacent_pairs(resolver.grid_size());

    while !session.is_over() && session.turns() < MAX_TURNS {
        swaps.shuffle(&mut picker);
        let Some(effects) = play_turn(&mut resolver, &swaps) else {
            log::warn!("no accepted swap on a board with a legal move");
            break;
        };

        let summary = session.apply(&effects);
        session.tick(TURN_MS);
        println!(
            "\nturn {}: +{} in {} step(s){} | score {} | {}",
            session.turns(),
            summary.score_delta,
            summary.steps,
            if summary.reshuffles > 0 { ", reshuffled" } else { "" },
            session.score(),
            remaining(&session)
        );
        print_board(resolver.grid())?;
    }

    let high_score = session.finish();
    println!(
        "\ngame over after {} turn(s): score {}, high score {}",
        session.turns(),
        session.score(),
        high_score
    );
    Ok(())
}

/// Try swaps in order until one is accepted
fn play_turn(resolver: &mut Resolver, swaps: &[(Coord, Coord)]) -> Option<Vec<Effect>> {
    swaps.iter().find_map(|&(a, b)| {
        let effects = resolver.attempt_swap(a, b);
        match effects.first() {
            Some(effect) if effect.is_rejected() => None,
            _ => Some(effects),
        }
    })
}

fn adjacent_pairs(size: usize) -> Vec<(Coord, Coord)> {
    let mut pairs = Vec::with_capacity(2 * size * size);
    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                pairs.push((Coord::new(row, col), Coord::new(row, col + 1)));
            }
            if row + 1 < size {
                pairs.push((Coord::new(row, col), Coord::new(row + 1, col)));
            }
        }
    }
    pairs
}

fn remaining(session: &Session) -> String {
    match session.mode() {
        GameMode::Time => format!("{}s left", session.time_left_secs()),
        GameMode::Moves => format!("{} move(s) left", session.moves_left()),
    }
}
