//! BioBots Headless Simulation Harness
//!
//! Validates the simulation core end to end without a renderer or browser.
//! Runs entirely in-process with injected timestamps — no wall clock, no
//! threads, no I/O beyond the report.
//!
//! Usage:
//!   cargo run -p biobots-simtest
//!   cargo run -p biobots-simtest -- --verbose

use biobots_engine::commands::{
    assign_work_command, spawn_bot_command, spawn_land_command, water_command, PlayerState,
};
use biobots_engine::snapshot::{load, save, SaveData};
use biobots_logic::entity::GAUGE_MAX;
use biobots_logic::score::score_rate;
use biobots_logic::{advance_world, BotState, Gender, NullSink, SimConfig, Vec2};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== BioBots Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Scoring tier sweep
    results.extend(validate_scoring());

    // 2. Death and decay timing boundaries
    results.extend(validate_timers());

    // 3. Player economy loop
    results.extend(validate_economy());

    // 4. A full simulated day in the world
    results.extend(validate_world_run());

    // 5. Snapshot round-trip
    results.extend(validate_snapshot());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!("\n=== RESULT: {}/{} passed, {} failed ===", passed, total, failed);
    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Sections ────────────────────────────────────────────────────────────

fn validate_scoring() -> Vec<TestResult> {
    let cfg = SimConfig::default();
    let table = [
        (100.0, cfg.green_tick, "green at 100"),
        (75.0, cfg.pink_tick, "pink at 75"),
        (50.0, cfg.pink_tick, "pink at boundary 50"),
        (49.0, cfg.yellow_tick, "yellow at 49"),
        (0.0, cfg.yellow_tick, "yellow at 0"),
    ];
    table
        .iter()
        .map(|(level, expected, label)| {
            let got = score_rate(*level, &cfg);
            check(
                &format!("scoring/{label}"),
                got == *expected,
                format!("score_rate({level}) = {got}"),
            )
        })
        .collect()
}

fn validate_timers() -> Vec<TestResult> {
    let cfg = SimConfig::default();
    let mut results = Vec::new();

    // A bot at zero energy from t=0: alive through the grace window, dead
    // at the boundary, gone after frozen+fade.
    let mut world = vec![make_bot(&cfg)];
    if let Some(attrs) = world[0].bot_mut() {
        attrs.energy = 0.0;
    }
    world = advance_world(&world, &cfg, 2.0, 30.0, 0, &NullSink);

    let before = advance_world(&world, &cfg, 2.0, 30.0, cfg.time_to_die_ms - 1, &NullSink);
    results.push(check(
        "timers/alive before grace elapses",
        before[0].bot().map(|a| a.state) != Some(BotState::Dead),
        format!("state = {:?}", before[0].bot().map(|a| a.state)),
    ));

    world = advance_world(&world, &cfg, 2.0, 30.0, cfg.time_to_die_ms, &NullSink);
    results.push(check(
        "timers/dead at grace boundary",
        world[0].bot().map(|a| a.state) == Some(BotState::Dead),
        format!("state = {:?}", world[0].bot().map(|a| a.state)),
    ));

    let still_there = advance_world(
        &world,
        &cfg,
        2.0,
        30.0,
        cfg.time_to_die_ms + cfg.corpse_lifetime_ms(),
        &NullSink,
    );
    let gone = advance_world(
        &world,
        &cfg,
        2.0,
        30.0,
        cfg.time_to_die_ms + cfg.corpse_lifetime_ms() + 1,
        &NullSink,
    );
    results.push(check(
        "timers/corpse kept through frozen+fade",
        still_there.len() == 1,
        format!("{} entities at the edge", still_there.len()),
    ));
    results.push(check(
        "timers/corpse removed after frozen+fade",
        gone.is_empty(),
        format!("{} entities past the edge", gone.len()),
    ));

    // Land decay: armed at first empty tick, removed strictly after timeout.
    let mut world = vec![make_land(&cfg, 0.0)];
    world = advance_world(&world, &cfg, 2.0, 30.0, 0, &NullSink);
    let kept = advance_world(&world, &cfg, 2.0, 30.0, cfg.decay_timeout_ms, &NullSink);
    let removed = advance_world(&world, &cfg, 2.0, 30.0, cfg.decay_timeout_ms + 1, &NullSink);
    results.push(check(
        "timers/empty land kept at timeout edge",
        kept.len() == 1,
        format!("{} entities", kept.len()),
    ));
    results.push(check(
        "timers/empty land removed past timeout",
        removed.is_empty(),
        format!("{} entities", removed.len()),
    ));

    results
}

fn validate_economy() -> Vec<TestResult> {
    let cfg = SimConfig::default();
    let mut results = Vec::new();
    let mut rng = rand_lite();
    let mut player = PlayerState::new(&cfg);
    let mut world = Vec::new();

    let bot_id = spawn_bot_command(
        &mut player,
        &mut world,
        &mut rng,
        Gender::Female,
        None,
        Vec2::new(800.0, 800.0),
        0,
        &cfg,
        &NullSink,
    );
    let land_id = spawn_land_command(
        &mut player,
        &mut world,
        Vec2::new(820.0, 800.0),
        0,
        &cfg,
        &NullSink,
    );
    results.push(check(
        "economy/spawns succeed and bill mana",
        bot_id.is_ok()
            && land_id.is_ok()
            && player.mana == cfg.starting_mana - cfg.bot_cost - cfg.land_cost,
        format!("mana = {}", player.mana),
    ));

    let land_id = land_id.unwrap_or_default();
    let watered = water_command(&mut player, &mut world, &land_id, &cfg, &NullSink);
    let level = world
        .iter()
        .find(|e| e.id == land_id)
        .and_then(|e| e.land())
        .map_or(0.0, |l| l.resource_level);
    results.push(check(
        "economy/watering fills the node",
        watered.is_ok() && level == cfg.water_growth,
        format!("resource_level = {level}"),
    ));

    let bot_id = bot_id.unwrap_or_default();
    let assigned = assign_work_command(&mut world, &bot_id, 0, &cfg, &NullSink);
    results.push(check(
        "economy/work assignment",
        assigned.is_ok(),
        format!("assigned = {:?}", assigned.is_ok()),
    ));

    // Drain the player dry and confirm the next spawn is refused.
    player.mana = 0.0;
    let refused = spawn_bot_command(
        &mut player,
        &mut world,
        &mut rng,
        Gender::Male,
        None,
        Vec2::new(0.0, 0.0),
        0,
        &cfg,
        &NullSink,
    );
    results.push(check(
        "economy/broke player refused",
        refused.is_err() && world.len() == 2,
        format!("world size = {}", world.len()),
    ));

    results
}

fn validate_world_run() -> Vec<TestResult> {
    let cfg = SimConfig::default();
    let mut results = Vec::new();

    let empty = advance_world(&[], &cfg, 2.0, 30.0, 0, &NullSink);
    results.push(check(
        "world/empty input stays empty",
        empty.is_empty(),
        format!("{} entities", empty.len()),
    ));

    // One worker on a full node, one wanderer, 2000 ticks at 16 ms.
    let mut worker = make_bot(&cfg);
    worker.id = "worker".into();
    if let Some(attrs) = worker.bot_mut() {
        attrs.state = BotState::Working;
        attrs.work_end_time = Some(u64::MAX);
    }
    let mut wanderer = make_bot(&cfg);
    wanderer.id = "wanderer".into();
    wanderer.pos = Vec2::new(1_400.0, 1_400.0);
    let mut world = vec![worker, make_land(&cfg, 100.0), wanderer];

    let mut gauges_ok = true;
    let mut score_monotonic = true;
    let mut last_score = 0.0_f32;
    for tick in 0..2_000_u64 {
        world = advance_world(&world, &cfg, 2.0, 30.0, tick * 16, &NullSink);
        for entity in &world {
            if let Some(attrs) = entity.bot() {
                gauges_ok &= (0.0..=GAUGE_MAX).contains(&attrs.energy);
                gauges_ok &= entity.pos.x >= 0.0 && entity.pos.x <= cfg.world_size;
                gauges_ok &= entity.pos.y >= 0.0 && entity.pos.y <= cfg.world_size;
            }
            if let Some(attrs) = entity.land() {
                gauges_ok &= (0.0..=GAUGE_MAX).contains(&attrs.resource_level);
            }
        }
        let score = world
            .iter()
            .find(|e| e.id == "worker")
            .and_then(|e| e.bot())
            .map_or(last_score, |a| a.individual_score);
        score_monotonic &= score >= last_score;
        last_score = score;
    }

    results.push(check(
        "world/gauges and positions stay in bounds",
        gauges_ok,
        "2000 ticks swept".to_string(),
    ));
    results.push(check(
        "world/worker score is monotonic and positive",
        score_monotonic && last_score > 0.0,
        format!("final score = {last_score}"),
    ));

    results
}

fn validate_snapshot() -> Vec<TestResult> {
    let cfg = SimConfig::default();
    let world = vec![make_bot(&cfg), make_land(&cfg, 55.0)];
    let data = SaveData::new(123, PlayerState::new(&cfg), world.clone());

    let mut buf = Vec::new();
    let round_trip = save(&mut buf, &data)
        .ok()
        .and_then(|_| load(buf.as_slice()).ok())
        .map_or(false, |loaded| loaded.entities == world);

    vec![check(
        "snapshot/json round-trip",
        round_trip,
        format!("{} bytes", buf.len()),
    )]
}

// ── Fixtures ────────────────────────────────────────────────────────────

fn make_bot(cfg: &SimConfig) -> biobots_logic::Entity {
    let mut rng = rand_lite();
    let attrs = biobots_engine::spawn::bot_attributes(&mut rng, Gender::Male, None);
    biobots_engine::spawn::spawn_biobot(
        attrs,
        Vec2::new(cfg.world_size / 2.0, cfg.world_size / 2.0),
        0,
        &NullSink,
    )
}

fn make_land(cfg: &SimConfig, resource_level: f32) -> biobots_logic::Entity {
    let mut entity = biobots_engine::spawn::spawn_land(
        Vec2::new(cfg.world_size / 2.0 + 10.0, cfg.world_size / 2.0),
        0,
        &NullSink,
    );
    if let Some(land) = entity.land_mut() {
        land.resource_level = resource_level;
        if resource_level > 0.0 {
            land.empty_since = None;
        }
    }
    entity
}

fn rand_lite() -> impl rand::Rng {
    use rand::SeedableRng;
    rand::rngs::StdRng::seed_from_u64(0xB10B)
}
