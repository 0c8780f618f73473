use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

use crate::config::Config;
use crate::connect::accounts::AccountStore;
use crate::connect::bookings::{BookingLedger, BookingOutcome};
use crate::connect::catalog::Catalog;
use crate::connect::fixture::load_grounds;
use crate::connect::storage::{MemoryStorage, Storage};
use crate::connect::teams::{JoinOutcome, TeamBoard};
use crate::error::Result;
use crate::model::*;

const ANONYMOUS_JOINER: &str = "New Player";

/// The main entry point: one visitor's session over the ground catalog,
/// account store, team board and booking ledger.
///
/// All state lives in this struct. Only the account list outlives it, through
/// the [`Storage`] it was opened with.
///
/// # Examples
///
/// ```
/// use cricket_connect::{parse_fixture, CricketConnect, MemoryStorage};
///
/// # fn main() -> cricket_connect::Result<()> {
/// let fixture = parse_fixture(r#"{"Sheet1": [{"Name": "City Arena", "Location": "Gachibowli", "Price per Hour": 1500}]}"#)?;
/// let mut app = CricketConnect::new(&fixture, MemoryStorage::new())?;
/// app.set_search("arena");
/// assert_eq!(app.filtered_grounds().len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct CricketConnect<S: Storage = MemoryStorage> {
    config: Config,
    catalog: Catalog,
    accounts: AccountStore<S>,
    teams: TeamBoard,
    bookings: BookingLedger,
    session: Session,
}

impl<S: Storage> CricketConnect<S> {
    /// Start a session with default settings.
    pub fn new(fixture: &[FixtureRecord], storage: S) -> Result<Self> {
        Self::with_config(fixture, storage, Config::default())
    }

    /// Start a session with the given settings. Availability is drawn from
    /// `config.seed` when set.
    pub fn with_config(fixture: &[FixtureRecord], storage: S, config: Config) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(fixture, storage, config, &mut rng)
    }

    /// Start a session drawing ground availability from `rng`.
    #[instrument(skip_all, fields(grounds = fixture.len()))]
    pub fn with_rng<R: Rng + ?Sized>(
        fixture: &[FixtureRecord],
        storage: S,
        config: Config,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let catalog = Catalog::new(load_grounds(fixture, config.availability_ratio, rng));
        let accounts = AccountStore::open(storage, config.storage_key.clone(), config.password)?;

        Ok(Self {
            config,
            catalog,
            accounts,
            teams: TeamBoard::seeded(),
            bookings: BookingLedger::default(),
            session: Session::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// The logged-in player, looked up in the account store.
    pub fn current_user(&self) -> Option<&Player> {
        self.session
            .current_player
            .as_deref()
            .and_then(|id| self.accounts.get(id))
    }

    pub fn registered_players(&self) -> &[Player] {
        self.accounts.players()
    }

    pub fn storage(&self) -> &S {
        self.accounts.storage()
    }

    /// Register a player and log them in, returning the new account.
    #[instrument(skip_all, fields(email = %form.email))]
    pub fn register(&mut self, form: RegistrationForm) -> Result<&Player> {
        let player = self.accounts.register(form)?;
        self.session.current_player = Some(player.id.clone());
        Ok(player)
    }

    /// Log in as the account matching `email` and `password`.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Player> {
        let player = self.accounts.login(email, password)?;
        self.session.current_player = Some(player.id.clone());
        Ok(player)
    }

    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        self.session.current_player = None;
    }

    pub fn grounds(&self) -> &[Ground] {
        self.catalog.grounds()
    }

    pub fn ground(&self, id: &str) -> Option<&Ground> {
        self.catalog.get(id)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.session.search = search.into();
    }

    pub fn set_filter(&mut self, filter: GroundFilter) {
        self.session.filter = filter;
    }

    pub fn navigate(&mut self, entry: NavEntry) {
        self.session.navigate(entry);
    }

    /// Grounds matching the session's search text and type filter.
    pub fn filtered_grounds(&self) -> Vec<&Ground> {
        self.catalog.filter(&self.session.search, self.session.filter)
    }

    pub fn team_requests(&self) -> &[TeamRequest] {
        self.teams.requests()
    }

    /// Post a team request captained by the current user.
    #[instrument(skip_all, fields(team = %form.team_name))]
    pub fn create_team_request(&mut self, form: TeamRequestForm) -> Notice {
        let captain = self
            .session
            .current_player
            .as_deref()
            .and_then(|id| self.accounts.get(id));
        self.teams.create(form, captain);
        Notice::TeamRequestCreated
    }

    /// Join a team request as the current user.
    #[instrument(skip(self))]
    pub fn join_team(&mut self, request_id: &str) -> Notice {
        let name = self
            .current_user()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| ANONYMOUS_JOINER.to_string());

        match self.teams.join(request_id, &name) {
            JoinOutcome::Joined { team_name, .. } => Notice::JoinedTeam { team_name },
            JoinOutcome::NotFound | JoinOutcome::NoSlots => Notice::TeamNotJoinable,
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        self.bookings.bookings()
    }

    /// Book a ground for today at the configured slot.
    #[instrument(skip(self))]
    pub fn book_ground(&mut self, ground_id: &str) -> Result<BookingOutcome> {
        let today = Local::now().date_naive();
        self.bookings.book(
            &mut self.catalog,
            ground_id,
            today,
            &self.config.booking_slot,
        )
    }
}
