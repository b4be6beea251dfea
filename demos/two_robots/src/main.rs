//! two_robots — smallest demo for the rust_fleet delivery simulator.
//!
//! Two robots on an open 5×5 grid, each fetching one package to the opposite
//! corner.  The same scenario is executed twice: once following an embedded
//! planner transcript, once with BFS-synthesized routes, and the two runs are
//! summarized side by side.

use std::time::Instant;

use anyhow::Result;

use fleet_core::{ExecConfig, ExecMode, Location, PackageId, PathPolicy, RobotId, Tick};
use fleet_exec::{EngineBuilder, ExecEngine, ExecObserver, ExecutionReport, NoopObserver, TickRecord};
use fleet_grid::Grid;
use fleet_plan::parse_plan;
use fleet_world::{Package, Robot, Scenario};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_HEIGHT: u32 = 5;
const GRID_WIDTH:  u32 = 5;

// ── Planner transcript ────────────────────────────────────────────────────────

// Both robots act at every step, so the parallel engine commits two actions
// per tick with no contention.  Zone names are `zone_<row>_<col>`.
const PLAN: &str = "\
; two_robots delivery plan, one step index per tick
0: (move r0 zone_0_0 zone_0_1)
0: (move r1 zone_4_0 zone_4_1)
1: (move r0 zone_0_1 zone_0_2)
1: (move r1 zone_4_1 zone_4_2)
2: (pickup r0 p0 zone_0_2)
2: (pickup r1 p1 zone_4_2)
3: (move r0 zone_0_2 zone_1_2)
3: (move r1 zone_4_2 zone_4_3)
4: (move r0 zone_1_2 zone_2_2)
4: (move r1 zone_4_3 zone_4_4)
5: (move r0 zone_2_2 zone_3_2)
5: (move r1 zone_4_4 zone_3_4)
6: (move r0 zone_3_2 zone_4_2)
6: (move r1 zone_3_4 zone_2_4)
7: (move r0 zone_4_2 zone_4_3)
7: (move r1 zone_2_4 zone_1_4)
8: (move r0 zone_4_3 zone_4_4)
8: (move r1 zone_1_4 zone_0_4)
9: (drop r0 p0 zone_4_4)
9: (drop r1 p1 zone_0_4)
";

// ── Observer that prints each committed tick ──────────────────────────────────

struct PrintObserver;

impl ExecObserver for PrintObserver {
    fn on_tick_end(&mut self, tick: Tick, record: &TickRecord) {
        for action in &record.committed {
            println!("  {tick}  {action}");
        }
        for d in &record.deferred {
            println!("  {tick}  deferred {} ({:?})", d.action, d.reason);
        }
        for f in &record.failures {
            println!("  {tick}  FAILED {} ({:?})", f.action, f.kind);
        }
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

fn build_scenario() -> Result<Scenario> {
    let grid = Grid::open(GRID_HEIGHT, GRID_WIDTH)?;
    let robots = vec![
        Robot::new(RobotId(0), Location::new(0, 0)),
        Robot::new(RobotId(1), Location::new(4, 0)),
    ];
    let packages = vec![
        Package::new(PackageId(0), Location::new(0, 2), Location::new(4, 4)),
        Package::new(PackageId(1), Location::new(4, 2), Location::new(0, 4)),
    ];
    let assignments = vec![(RobotId(0), PackageId(0)), (RobotId(1), PackageId(1))];
    Ok(Scenario::new(grid, robots, packages, assignments)?)
}

fn summarize(label: &str, report: &ExecutionReport, engine: &ExecEngine) {
    println!();
    println!("-- {label} summary --");
    println!(
        "  status: {:?}  |  ticks: {}  |  committed: {}  |  deferred: {}  |  failed: {}",
        report.status,
        report.final_tick.0,
        report.committed_count(),
        report.deferral_count(),
        report.failure_count(),
    );
    println!("  {:<8} {:<12} {:<10}", "Robot", "At", "Carrying");
    for robot in &engine.robots {
        println!(
            "  {:<8} {:<12} {:<10}",
            robot.id.to_string(),
            robot.location.to_string(),
            robot.carrying.map_or_else(|| "-".into(), |p| p.to_string()),
        );
    }
    println!("  {:<8} {:<12} {:<10}", "Package", "At", "Delivered");
    for package in &engine.packages {
        println!(
            "  {:<8} {:<12} {:<10}",
            package.id.to_string(),
            package.location.map_or_else(|| "carried".into(), |l| l.to_string()),
            if package.delivered { "yes" } else { "no" },
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== two_robots — rust_fleet delivery simulator ===");
    println!("Grid: {GRID_HEIGHT}×{GRID_WIDTH}  |  Robots: 2  |  Packages: 2");
    println!();

    // 1. Scenario and name table.
    let scenario = build_scenario()?;
    let symbols = scenario.symbol_table();

    // 2. Parse the embedded planner transcript.
    let parsed = parse_plan(PLAN, &symbols)?;
    for issue in &parsed.issues {
        eprintln!("skipped {issue}");
    }
    println!("Parsed {} plan actions", parsed.actions.len());
    println!();

    // 3. Planner-order run, tick by tick.
    println!("-- planner-order run --");
    let config = ExecConfig {
        mode:        ExecMode::Parallel,
        path_policy: PathPolicy::FollowPlan,
        ..ExecConfig::default()
    };
    let mut engine = EngineBuilder::new(config, scenario)
        .plan(parsed.actions)
        .build()?;
    let t0 = Instant::now();
    let report = engine.run(&mut PrintObserver);
    let elapsed = t0.elapsed();
    summarize("planner-order", &report, &engine);
    println!("  wall time: {:.3} ms", elapsed.as_secs_f64() * 1e3);

    // 4. Same scenario with BFS-synthesized routes instead of planner moves.
    let config = ExecConfig {
        mode:        ExecMode::Parallel,
        path_policy: PathPolicy::ShortestPath,
        ..ExecConfig::default()
    };
    let mut engine = EngineBuilder::new(config, build_scenario()?).build()?;
    let report = engine.run(&mut NoopObserver);
    summarize("shortest-path", &report, &engine);

    Ok(())
}
