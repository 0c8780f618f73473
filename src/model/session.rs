use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::ground::GroundFilter;

/// Transient per-visit state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Id of the logged-in player in the account store.
    pub current_player: Option<String>,
    pub active_tab: Tab,
    pub search: String,
    pub filter: GroundFilter,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.current_player.is_some()
    }

    /// Apply a navigation click. The two type entries narrow the grounds tab;
    /// every other entry clears the type filter.
    pub fn navigate(&mut self, entry: NavEntry) {
        match entry {
            NavEntry::FullGrounds => {
                self.filter = GroundFilter::FullGround;
                self.active_tab = Tab::Grounds;
            }
            NavEntry::BoxCricket => {
                self.filter = GroundFilter::BoxCricket;
                self.active_tab = Tab::Grounds;
            }
            NavEntry::AllGrounds => {
                self.filter = GroundFilter::All;
                self.active_tab = Tab::Grounds;
            }
            NavEntry::TeamRequests => {
                self.filter = GroundFilter::All;
                self.active_tab = Tab::Teams;
            }
            NavEntry::MyBookings => {
                self.filter = GroundFilter::All;
                self.active_tab = Tab::Bookings;
            }
        }
    }

    /// Whether `entry` should render as the selected navigation item.
    pub fn is_nav_active(&self, entry: NavEntry) -> bool {
        match entry {
            NavEntry::AllGrounds => self.active_tab == Tab::Grounds,
            NavEntry::TeamRequests => self.active_tab == Tab::Teams,
            NavEntry::MyBookings => self.active_tab == Tab::Bookings,
            NavEntry::FullGrounds => self.filter == GroundFilter::FullGround,
            NavEntry::BoxCricket => self.filter == GroundFilter::BoxCricket,
        }
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    Grounds,
    Teams,
    Bookings,
}

/// Entries of the main navigation bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum_macros::Display)]
pub enum NavEntry {
    #[strum(serialize = "All Grounds")]
    AllGrounds,
    #[strum(serialize = "Full Grounds")]
    FullGrounds,
    #[strum(serialize = "Box Cricket")]
    BoxCricket,
    #[strum(serialize = "Team Requests")]
    TeamRequests,
    #[strum(serialize = "My Bookings")]
    MyBookings,
}
