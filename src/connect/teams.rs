use chrono::NaiveDate;
use tracing::debug;

use crate::model::{Player, SkillLevel, TeamRequest, TeamRequestForm, TeamRequestStatus};
use crate::utils::next_id;

const ANONYMOUS_CAPTAIN: &str = "Anonymous";
const ANONYMOUS_CONTACT: &str = "Contact via app";
const ANONYMOUS_ROSTER_NAME: &str = "You";

/// Result of a join attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    Joined {
        team_name: String,
        players_needed: u32,
        status: TeamRequestStatus,
    },
    /// No request with that id; nothing changed.
    NotFound,
    /// The request has no slots left; nothing changed.
    NoSlots,
}

/// The session's team-formation postings, in creation order.
#[derive(Debug, Clone, Default)]
pub struct TeamBoard {
    requests: Vec<TeamRequest>,
}

impl TeamBoard {
    /// A board holding the two standing postings every session starts with.
    pub fn seeded() -> Self {
        Self {
            requests: vec![
                TeamRequest {
                    id: "1".to_string(),
                    captain_name: "Rahul Sharma".to_string(),
                    team_name: "Hyderabad Strikers".to_string(),
                    location: "Aziz Nagar".to_string(),
                    date: seed_date(2024, 1, 20),
                    time: "10:00 AM".to_string(),
                    players_needed: 3,
                    skill_level: SkillLevel::Intermediate,
                    description: "Looking for 3 players for weekend match. Need 2 batsmen and 1 bowler."
                        .to_string(),
                    contact: "9876543210".to_string(),
                    status: TeamRequestStatus::Open,
                    current_players: vec!["Rahul Sharma".to_string(), "Vikram Singh".to_string()],
                },
                TeamRequest {
                    id: "2".to_string(),
                    captain_name: "Priya Patel".to_string(),
                    team_name: "Cyberabad Warriors".to_string(),
                    location: "Shamshabad".to_string(),
                    date: seed_date(2024, 1, 21),
                    time: "2:00 PM".to_string(),
                    players_needed: 2,
                    skill_level: SkillLevel::Beginner,
                    description: "Friendly match, all skill levels welcome. Need 2 more players."
                        .to_string(),
                    contact: "9876543211".to_string(),
                    status: TeamRequestStatus::Open,
                    current_players: vec![
                        "Priya Patel".to_string(),
                        "Arjun Reddy".to_string(),
                        "Neha Gupta".to_string(),
                    ],
                },
            ],
        }
    }

    pub fn requests(&self) -> &[TeamRequest] {
        &self.requests
    }

    pub fn get(&self, id: &str) -> Option<&TeamRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Post a new open request. The captain is the logged-in player, if any,
    /// and is the first name on the roster.
    pub fn create(&mut self, form: TeamRequestForm, captain: Option<&Player>) -> &TeamRequest {
        let request = TeamRequest {
            id: next_id(),
            captain_name: captain
                .map(|p| p.name.clone())
                .unwrap_or_else(|| ANONYMOUS_CAPTAIN.to_string()),
            team_name: form.team_name,
            location: form.location,
            date: form.date,
            time: form.time,
            players_needed: form.players_needed,
            skill_level: form.skill_level,
            description: form.description,
            contact: captain
                .map(|p| p.phone.clone())
                .unwrap_or_else(|| ANONYMOUS_CONTACT.to_string()),
            status: TeamRequestStatus::Open,
            current_players: vec![captain
                .map(|p| p.name.clone())
                .unwrap_or_else(|| ANONYMOUS_ROSTER_NAME.to_string())],
        };
        debug!(id = %request.id, team = %request.team_name, "team request created");

        self.requests.push(request);
        &self.requests[self.requests.len() - 1]
    }

    /// Add `player_name` to a request's roster, taking one slot.
    ///
    /// The same name may join more than once.
    pub fn join(&mut self, id: &str, player_name: &str) -> JoinOutcome {
        let Some(request) = self.requests.iter_mut().find(|r| r.id == id) else {
            debug!(id, "join ignored: no such request");
            return JoinOutcome::NotFound;
        };
        if request.players_needed == 0 {
            debug!(id, "join ignored: request has no slots");
            return JoinOutcome::NoSlots;
        }

        request.current_players.push(player_name.to_string());
        request.players_needed -= 1;
        request.status = if request.players_needed == 0 {
            TeamRequestStatus::Full
        } else {
            TeamRequestStatus::Open
        };
        debug!(id, player_name, players_needed = request.players_needed, status = %request.status, "joined team");

        JoinOutcome::Joined {
            team_name: request.team_name.clone(),
            players_needed: request.players_needed,
            status: request.status,
        }
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
