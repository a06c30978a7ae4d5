//! Casa demo
//!
//! Runs the panel against the in-memory backend: renders the dashboard as
//! text, toggles a switch, authors one trigger of each kind, and runs the
//! bundled scene. Useful as a smoke test and as a worked example of the
//! panel API.

use std::sync::Arc;

use anyhow::Result;
use casa_automation::{Operator, SunEvent, TriggerComposer, TriggerKind};
use casa_panel::{DashboardModel, EntityCard, SceneBoard};
use casa_stores::{DeviceStore, HomeFixture, HomeStore, MemoryBackend};
use casa_theme::ThemeService;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const FIXTURE: &str = include_str!("../../fixtures/home.yaml");

fn render(card: &EntityCard) -> String {
    match card {
        EntityCard::TempHumidity(c) => format!(
            "{}: {}°C / {}%",
            c.title,
            c.temperature_display(),
            c.humidity_display()
        ),
        EntityCard::Climate(c) => format!(
            "{}: {}°C / {}% / {} hPa",
            c.title,
            c.temperature_display(),
            c.humidity_display(),
            c.pressure_display()
        ),
        EntityCard::SingleValue(c) | EntityCard::Sensor(c) => {
            format!("{}: {}", c.title, c.display())
        }
        EntityCard::BinaryToggle(c) => {
            format!("{}: [{}]", c.title, if c.is_on { "ON" } else { "OFF" })
        }
        EntityCard::Light(c) => format!(
            "{}: [{}] brightness {:?}",
            c.title,
            if c.is_on { "ON" } else { "OFF" },
            c.brightness
        ),
        EntityCard::Motor(c) => format!("{}: speed {:?}", c.title, c.speed),
        EntityCard::Toggle(c) => {
            format!("{}: [{}]", c.title, if c.is_on { "ON" } else { "OFF" })
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Casa demo");

    let fixture = HomeFixture::from_yaml_str(FIXTURE)?;
    let backend = Arc::new(MemoryBackend::from_fixture(fixture));
    let home = backend.current_home().await?;

    let theme = ThemeService::new(std::env::temp_dir().join("casa-demo"));
    theme.load().await?;
    info!(mode = ?theme.mode(), background = theme.palette().background, "Theme ready");

    // Dashboard: one section per device, cards picked by the dispatcher
    let mut dashboard = DashboardModel::new(backend.clone());
    for section in dashboard.sections().await {
        println!("== {} ==", section.title);
        for card in &section.cards {
            println!("  {}", render(card));
        }
    }

    // Toggle the living room plug through its card
    let sections = dashboard.sections().await;
    let plug_request = sections
        .iter()
        .flat_map(|s| &s.cards)
        .find_map(|card| match card {
            EntityCard::Toggle(c) if c.title == "Living Plug" => c.toggle(),
            _ => None,
        })
        .expect("demo fixture has a living room plug");
    dashboard.send(plug_request).await;
    info!("Toggled the living room plug");

    // Author one trigger of each kind
    let mut composer = TriggerComposer::new();

    let devices = backend.devices().await?;
    let sensor = devices
        .iter()
        .flat_map(|d| &d.entities)
        .find(|e| e.name.contains("temp"))
        .expect("demo fixture has a temperature sensor");
    composer.condition.select_entity(sensor)?;
    composer.condition.select_attribute("temperature")?;
    composer.condition.select_operator(Operator::GreaterThan)?;
    composer.condition.set_value("25");
    println!("state trigger: {}", serde_json::to_string(&composer.complete()?)?);

    composer.set_kind(TriggerKind::Time);
    composer.time.set_time("18:30");
    composer.time.toggle_day(4);
    composer.time.toggle_day(5);
    println!("time trigger:  {}", serde_json::to_string(&composer.complete()?)?);

    composer.set_kind(TriggerKind::Sun);
    composer.sun.set_event(SunEvent::Sunset);
    composer.sun.set_offset(-30);
    println!("sun trigger:   {}", serde_json::to_string(&composer.complete()?)?);

    // Run the bundled scene and show the alerts it produced
    let mut board = SceneBoard::new(backend.clone(), home.id);
    board.run("scene_movie").await;
    for alert in board.alerts.drain() {
        println!("[{:?}] {}: {}", alert.severity, alert.title, alert.message);
    }

    info!("Casa demo finished");
    Ok(())
}
