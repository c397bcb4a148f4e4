use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mathmaster_api::cli;
use mathmaster_api::router::init_router;
use mathmaster_api::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("create-admin") => {
            handle_create_admin(args).await;
            return;
        }
        Some("seed-demo-users") => {
            handle_seed_demo_users().await;
            return;
        }
        _ => {}
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await;
    let addr = format!("{}:{}", state.app_config.host, state.app_config.port);
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    println!("Server running on http://{addr}");
    println!("API reference available at http://{addr}/scalar");
    axum::serve(listener, app).await.expect("Server error");
}

async fn connect_pool() -> sqlx::PgPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

async fn handle_create_admin(args: Vec<String>) {
    if args.len() != 6 {
        eprintln!(
            "Usage: {} create-admin <first_name> <last_name> <email> <password>",
            args[0]
        );
        std::process::exit(1);
    }

    let pool = connect_pool().await;

    match cli::create_admin(&pool, &args[2], &args[3], &args[4], &args[5]).await {
        Ok(()) => {
            println!("Admin created successfully: {}", args[4]);
        }
        Err(e) => {
            eprintln!("Error creating admin: {:?}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed_demo_users() {
    let pool = connect_pool().await;

    match cli::seed_demo_users(&pool).await {
        Ok(created) if created.is_empty() => {
            println!("Demo users already present, nothing to do");
        }
        Ok(created) => {
            for email in created {
                println!("Created demo user: {email}");
            }
        }
        Err(e) => {
            eprintln!("Error seeding demo users: {:?}", e);
            std::process::exit(1);
        }
    }
}
