use fps_sim::frameworks::config::ConfigError;
use fps_sim::{RunError, SimConfig};
use fps_sim::interface_adapters::{Hud, HudState};
use fps_sim::use_cases::events;
use fps_sim::use_cases::{SimSettings, Simulation};
use std::io::Write;

fn quick_config(extra: &str) -> SimConfig {
    SimConfig::from_toml_str(&format!("ticks = 120\ntick_interval_ms = 1\nseed = 5\n{extra}"))
        .expect("valid config")
}

#[tokio::test]
async fn run_reports_hud_that_matches_the_final_world() {
    let config = quick_config("player_name = \"Ada\"\nspeed_multiplier = 1.5");

    let summary = fps_sim::run(config).await.expect("run");

    assert_eq!(summary.ticks, 120);
    assert_eq!(summary.world.tick, 120);
    assert_eq!(summary.hud.player_name.as_deref(), Some("Ada"));
    assert_eq!(summary.hud.speed_multiplier, 1.5);
    assert!(!summary.hud.settings_open);
    assert_eq!(summary.hud.health, summary.world.player.health);
    assert_eq!(summary.hud.max_health, 5);
}

#[tokio::test]
async fn run_clamps_an_out_of_range_speed() {
    let summary = fps_sim::run(quick_config("speed_multiplier = 50.0"))
        .await
        .expect("run");

    assert_eq!(summary.hud.speed_multiplier, 2.0);
}

#[tokio::test]
async fn run_accepts_a_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "ticks = 30\ntick_interval_ms = 1\n\n[player]\nmax_health = 9"
    )
    .expect("write config");
    let config = SimConfig::from_path(file.path()).expect("load");

    let summary = fps_sim::run(config).await.expect("run");

    assert_eq!(summary.ticks, 30);
    assert_eq!(summary.hud.max_health, 9);
}

#[test]
fn hud_scores_every_enemy_the_player_shoots() {
    let mut sim = Simulation::new(SimSettings {
        seed: 2,
        ..SimSettings::default()
    })
    .expect("sim");
    let hud = Hud::attach(sim.messenger_mut(), HudState::new(5)).expect("attach");
    let shoot = fps_sim::domain::PlayerInput {
        fire: true,
        ..Default::default()
    };

    let mut hits = 0;
    for _ in 0..60 {
        let report = sim.step(&shoot, 0.1).expect("step");
        hits += report.enemies_hit.len() as u32;
        assert_eq!(report.points_awarded, report.enemies_hit.len() as u32);
    }

    assert!(hits >= 2);
    assert_eq!(hud.state().score, hits);
    events::speed_changed(sim.messenger(), 0.5).expect("speed");
    assert_eq!(sim.speed_multiplier(), 0.5);
}

#[tokio::test]
async fn run_refuses_inverted_pitch_limits_before_starting() {
    let config = quick_config("[look]\nmin_vert = 45.0\nmax_vert = -45.0");

    let result = fps_sim::run(config).await;

    assert!(matches!(
        result,
        Err(RunError::Config(ConfigError::Invalid { .. }))
    ));
}

#[tokio::test]
async fn run_refuses_a_zero_turn_limit() {
    let config = quick_config("[enemy]\nmax_turn = 0");

    let result = fps_sim::run(config).await;

    assert!(matches!(
        result,
        Err(RunError::Config(ConfigError::Invalid { .. }))
    ));
}
