use std::fmt;

/// A blocking acknowledgement shown to the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Registered,
    TeamRequestCreated,
    JoinedTeam { team_name: String },
    TeamNotJoinable,
    GroundBooked { ground_name: String, price_per_hour: f64 },
    GroundUnavailable,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Registered => {
                write!(f, "Registration successful! Welcome to Cricket-Connect Hyderabad!")
            }
            Notice::TeamRequestCreated => write!(f, "Team request created successfully!"),
            Notice::JoinedTeam { .. } => write!(f, "Successfully joined the team!"),
            Notice::TeamNotJoinable => write!(f, "This team is not accepting players."),
            Notice::GroundBooked {
                ground_name,
                price_per_hour,
            } => write!(f, "Successfully booked {ground_name} for ₹{price_per_hour}/hour!"),
            Notice::GroundUnavailable => {
                write!(f, "This ground is already booked. Please try another one.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_notice_mentions_ground_and_price() {
        let notice = Notice::GroundBooked {
            ground_name: "City Arena".to_string(),
            price_per_hour: 1200.0,
        };
        assert_eq!(
            notice.to_string(),
            "Successfully booked City Arena for ₹1200/hour!"
        );
    }
}
