use prost::Message;
use territory_sim::game::traits::{Game, PlayerId};
use territory_sim::games::territory::pilot::{DirectionSource, RectanglePilot};
use territory_sim::games::territory::{Direction, TerritoryConfig, TerritoryGame};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("territory_sim=info".parse().unwrap()),
        )
        .init();

    let max_ticks: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2000);

    let config = TerritoryConfig::with_grid_size(48, 48);
    let mut game = TerritoryGame::with_config(config);

    let mut pilots: Vec<(PlayerId, RectanglePilot)> = Vec::new();
    for (index, name) in ["Ada", "Blaise", "Curie", "Dijkstra"].iter().enumerate() {
        let player_id = index as PlayerId + 1;
        match game.player_joined(player_id, name.to_string()) {
            Ok(()) => pilots.push((player_id, RectanglePilot::with_legs(8 + index as u32, 6))),
            Err(e) => tracing::warn!("Could not seat {}: {}", name, e),
        }
    }

    tracing::info!(
        "Arena started: {} players on a {}x{} grid, running up to {} ticks",
        pilots.len(),
        game.config().grid_width,
        game.config().grid_height,
        max_ticks
    );

    let mut interval = tokio::time::interval(game.tick_rate());
    loop {
        interval.tick().await;

        for (player_id, pilot) in pilots.iter_mut() {
            let Some(player) = game.state().get_player(*player_id) else {
                continue;
            };
            if !player.alive {
                continue;
            }
            let direction = pilot.next_direction(player, &game.state().grid);
            if direction != Direction::None {
                let input = territory_sim::protocol::territory::PlayerInput {
                    direction: direction.code(),
                };
                if let Err(e) = game.handle_input(*player_id, &input.encode_to_vec()) {
                    tracing::debug!("Input rejected for player {}: {}", player_id, e);
                }
            }
        }

        let result = game.tick();

        for elimination in &result.eliminated {
            tracing::info!(
                "Tick {}: player {} died ({:?})",
                game.current_tick(),
                elimination.victim,
                elimination.reason
            );
        }

        if game.current_tick() % 100 == 0 {
            let mut lines: Vec<String> = Vec::new();
            for player_id in game.state().sorted_player_ids() {
                if let Some(player) = game.state().get_player(player_id) {
                    lines.push(format!(
                        "{}={} ({} cells)",
                        player.name,
                        player.score,
                        game.state().grid.owned_count(player_id)
                    ));
                }
            }
            tracing::info!(
                "Tick {} ({} alive): {}",
                game.current_tick(),
                game.state().get_alive_count(),
                lines.join(", ")
            );
        }

        if game.is_game_over() {
            tracing::info!("Game over, winners: {:?}", game.get_winners());
            break;
        }

        if game.current_tick() >= max_ticks {
            tracing::info!("Tick limit reached");
            break;
        }
    }
}
