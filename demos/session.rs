use std::error::Error;

use cricket_connect::{
    parse_fixture, BookingOutcome, Config, CricketConnect, FileStorage, GroundFilter, Notice,
    RegistrationForm, TeamRequestForm,
};
use tracing_subscriber::EnvFilter;

const FIXTURE: &str = include_str!("../data/grounds.json");

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fixture = parse_fixture(FIXTURE)?;
    let storage = FileStorage::new(std::env::temp_dir().join("cricket-connect"));
    let mut app = CricketConnect::with_config(&fixture, storage, Config::default())?;
    println!(
        "Loaded {} grounds, {} registered players",
        app.grounds().len(),
        app.registered_players().len()
    );

    let email = "demo@cricketconnect.in";
    match app.login(email, "demo-pass") {
        Ok(player) => println!("Welcome back, {}", player.name),
        Err(_) => {
            let player = app.register(RegistrationForm {
                name: "Demo Player".to_string(),
                email: email.to_string(),
                phone: "9000000000".to_string(),
                password: "demo-pass".to_string(),
                confirm_password: "demo-pass".to_string(),
                ..Default::default()
            })?;
            println!("{} ({})", Notice::Registered, player.email);
        }
    }

    app.set_filter(GroundFilter::BoxCricket);
    for ground in app.filtered_grounds() {
        println!(
            "  [{}] {} ({}) ₹{}/hour {}",
            ground.id, ground.name, ground.location, ground.price_per_hour, ground.availability
        );
    }

    let ids: Vec<String> = app.grounds().iter().map(|g| g.id.clone()).collect();
    for id in ids {
        let outcome = app.book_ground(&id)?;
        println!("{}", outcome.notice());
        if matches!(outcome, BookingOutcome::Booked(_)) {
            break;
        }
    }

    let notice = app.create_team_request(TeamRequestForm {
        team_name: "Demo XI".to_string(),
        location: "Madhapur".to_string(),
        players_needed: 1,
        ..Default::default()
    });
    println!("{notice}");
    let requests: Vec<String> = app.team_requests().iter().map(|r| r.id.clone()).collect();
    for id in requests {
        println!("{}", app.join_team(&id));
    }
    for request in app.team_requests() {
        println!(
            "  {} ({}): {} needed, {}",
            request.team_name,
            request.status,
            request.players_needed,
            request.current_players.join(", ")
        );
    }

    println!("{}", serde_json::to_string_pretty(app.bookings())?);
    Ok(())
}
