use song_library::infra::config::Config;
use song_library::infra::logging;
use song_library::{MusicInfoApi, MusicInfoClient, PostgresSongStore, SongRepository};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--probe GROUP SONG]\n\
         \n\
         Requires env vars (or .env.local / .env):\n\
           DATABASE_URL (or POSTGRES_CONN), MUSIC_SERVER\n\
         Optional:\n\
           ENV, SERVER_ADDRESS, TIMEOUT, DB_MAX_CONNECTIONS\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let probe = match args.iter().position(|a| a == "--probe") {
        Some(idx) => match (args.get(idx + 1), args.get(idx + 2)) {
            (Some(group), Some(song)) => Some((group.clone(), song.clone())),
            _ => usage_and_exit(),
        },
        None => None,
    };

    let config = Config::from_env()?;
    logging::init(config.env);

    tracing::info!(
        env = ?config.env,
        server_address = %config.server_address,
        music_server = %config.music_server,
        timeout = ?config.timeout,
        "preflight: configuration loaded"
    );

    let store = PostgresSongStore::connect(&config.database_url, 1).await?;
    store.ping().await?;
    tracing::info!("preflight: database reachable, songs table present");

    let client = MusicInfoClient::new(config.music_server.clone())?;
    if let Some((group, song)) = probe {
        let details = client.song_details(&group, &song).await?;
        tracing::info!(release_date = %details.release_date, link = %details.link, "preflight: music info lookup ok");
    } else {
        tracing::info!("preflight: skipping music info probe (pass --probe GROUP SONG)");
    }

    tracing::info!("preflight OK");
    Ok(())
}
