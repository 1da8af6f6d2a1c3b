//! App rules around the wheel that work without a window.

use super::*;

use banner::WinnerBanner;
use confetti::Confetti;
use entries::{Entry, EntryError};
use palette::Palette;
use spin::{Clock, Hooks, SpinController, Tick};
use wheel::{SpinError, SpinResult, WheelState};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("the list can't change while the wheel is busy")]
    Busy,
    #[error("there is no entry #{}", .0 + 1)]
    NoSuchEntry(usize),
    #[error(transparent)]
    Entries(#[from] EntryError),
}

pub struct Session<C> {
    wheel: WheelState,
    controller: SpinController<C>,
    confetti: Confetti,
    banner: Option<WinnerBanner>,
    input: String,
}

impl<C: Clock> Session<C> {
    pub fn new(
        max_entries: usize,
        clock: C,
        spin: config::Spin,
        confetti: confetti::Config,
    ) -> Self {
        Self {
            wheel: WheelState::new(max_entries),
            controller: SpinController::new(clock, spin),
            confetti: Confetti::new(confetti),
            banner: None,
            input: String::new(),
        }
    }

    pub fn wheel(&self) -> &WheelState {
        &self.wheel
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub fn banner(&self) -> Option<&WinnerBanner> {
        self.banner.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Nothing on the list changes while the wheel turns or a winner is on screen
    pub fn locked(&self) -> bool {
        self.controller.is_spinning() || self.banner.is_some()
    }

    fn check_unlocked(&self) -> Result<(), EditError> {
        if self.locked() {
            return Err(EditError::Busy);
        }
        Ok(())
    }

    /// Repeated `--entry` values followed by the `--names` lines, all or nothing
    pub fn add_initial(
        &mut self,
        entry_args: &[String],
        names: Option<&str>,
    ) -> Result<usize, EditError> {
        let batch = entry_args
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(Entry::new)
            .chain(names.map(entries::parse_input).unwrap_or_default())
            .collect();
        Ok(self.wheel.entries.add_batch(batch)?)
    }

    /// Adds the typed names. The text stays in the input if they don't fit.
    pub fn submit_input(&mut self) -> Result<usize, EditError> {
        self.check_unlocked()?;
        let added = self.wheel.entries.add_from_input(&self.input)?;
        self.input.clear();
        Ok(added)
    }

    pub fn remove(&mut self, index: usize) -> Result<Entry, EditError> {
        self.check_unlocked()?;
        self.wheel
            .entries
            .remove(index)
            .ok_or(EditError::NoSuchEntry(index))
    }

    pub fn clear(&mut self) -> Result<(), EditError> {
        self.check_unlocked()?;
        self.wheel.clear();
        Ok(())
    }

    pub fn spin(&mut self, rng: &mut impl Rng) -> Result<SpinResult, SpinError> {
        if self.banner.is_some() {
            return Err(SpinError::WinnerPending);
        }
        self.controller.spin(&self.wheel, rng)
    }

    /// Advances everything by one frame and announces a spin that just finished
    pub fn update(
        &mut self,
        delta_time: f32,
        screen: vec2<f32>,
        palette: &Palette,
        rng: &mut impl Rng,
    ) {
        let mut finished = None;
        let tick = self.controller.tick(
            &mut self.wheel,
            &mut Hooks {
                on_tick: |state: &WheelState| {
                    log::trace!("rotation {:.2}", state.rotation_degrees)
                },
                on_complete: |index: usize, winner: &Entry| {
                    finished = Some((index, winner.clone()))
                },
            },
        );
        if let (Tick::Done, Some((index, winner))) = (tick, finished) {
            self.announce(index, winner, screen / 2.0, palette, rng);
        }

        if let Some(banner) = &mut self.banner {
            banner.update(delta_time);
        }
        self.confetti.update(screen.y);
    }

    fn announce(
        &mut self,
        index: usize,
        winner: Entry,
        origin: vec2<f32>,
        palette: &Palette,
        rng: &mut impl Rng,
    ) {
        log::info!("announcing {winner} (#{index})");
        self.confetti.burst(origin, palette, rng);
        self.banner = Some(WinnerBanner::new(index, winner));
    }

    /// Hides the banner and takes the winner off the wheel
    pub fn confirm_winner(&mut self) -> Option<Entry> {
        let banner = self.banner.take()?;
        self.confetti.stop();
        let index = if self.wheel.entries.get(banner.index) == Some(&banner.winner) {
            Some(banner.index)
        } else {
            self.wheel
                .entries
                .iter()
                .position(|entry| *entry == banner.winner)
        };
        let removed = index.and_then(|index| self.wheel.entries.remove(index));
        if let Some(removed) = &removed {
            log::info!("removed winner {removed}");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use spin::ManualClock;

    fn screen() -> vec2<f32> {
        vec2(800.0, 600.0)
    }

    fn with_names(labels: &[&str]) -> (Rc<ManualClock>, Session<Rc<ManualClock>>) {
        let clock = Rc::new(ManualClock::new());
        let mut session = Session::new(50, clock.clone(), default(), default());
        session
            .wheel
            .entries
            .add_batch(labels.iter().map(|&label| Entry::new(label)).collect())
            .unwrap();
        (clock, session)
    }

    fn labels<C: Clock>(session: &Session<C>) -> Vec<&str> {
        session.wheel().entries.iter().map(Entry::label).collect()
    }

    fn spin_to_winner(
        clock: &ManualClock,
        session: &mut Session<Rc<ManualClock>>,
        rng: &mut StdRng,
    ) -> SpinResult {
        let result = session.spin(rng).unwrap();
        clock.advance(10.0);
        session.update(1.0 / 60.0, screen(), &Palette::default(), rng);
        assert!(session.banner().is_some());
        result
    }

    fn show_winner(session: &mut Session<Rc<ManualClock>>, index: usize, label: &str) {
        session.announce(
            index,
            Entry::new(label),
            screen() / 2.0,
            &Palette::default(),
            &mut StdRng::seed_from_u64(0),
        );
    }

    #[test]
    fn confirm_removes_winning_slot_among_duplicates() {
        let (_, mut session) = with_names(&["Ann", "Bob", "Ann"]);
        show_winner(&mut session, 2, "Ann");
        assert_eq!(session.confirm_winner(), Some(Entry::new("Ann")));
        assert_eq!(labels(&session), ["Ann", "Bob"]);

        let (_, mut session) = with_names(&["Ann", "Bob", "Ann"]);
        show_winner(&mut session, 0, "Ann");
        session.confirm_winner();
        assert_eq!(labels(&session), ["Bob", "Ann"]);
    }

    #[test]
    fn confirm_falls_back_to_first_equal_label() {
        let (_, mut session) = with_names(&["Ann", "Bob", "Cat", "Bob"]);
        show_winner(&mut session, 7, "Bob");
        assert_eq!(session.confirm_winner(), Some(Entry::new("Bob")));
        assert_eq!(labels(&session), ["Ann", "Cat", "Bob"]);

        show_winner(&mut session, 0, "Zoe");
        assert_eq!(session.confirm_winner(), None);
        assert_eq!(labels(&session), ["Ann", "Cat", "Bob"]);
        assert!(session.banner().is_none());
    }

    #[test]
    fn confirm_stops_confetti() {
        let (clock, mut session) = with_names(&["Ann", "Bob", "Cat"]);
        let mut rng = StdRng::seed_from_u64(12);
        let result = spin_to_winner(&clock, &mut session, &mut rng);
        assert!(session.confetti().is_active());
        let winner = session.wheel().entries.get(result.winner_index).cloned();

        assert_eq!(session.confirm_winner(), winner);
        assert!(!session.confetti().is_active());
        assert!(session.banner().is_none());
        assert_eq!(session.wheel().entries.len(), 2);
    }

    #[test]
    fn edits_refused_while_winner_shown() {
        let (_, mut session) = with_names(&["Ann", "Bob"]);
        show_winner(&mut session, 1, "Bob");
        session.set_input("Dan".to_owned());
        assert_eq!(session.remove(0), Err(EditError::Busy));
        assert_eq!(session.clear(), Err(EditError::Busy));
        assert_eq!(session.submit_input(), Err(EditError::Busy));
        assert_eq!(labels(&session), ["Ann", "Bob"]);
        assert_eq!(session.input(), "Dan");
    }

    #[test]
    fn edits_refused_while_spinning() {
        let (clock, mut session) = with_names(&["Ann", "Bob"]);
        let mut rng = StdRng::seed_from_u64(5);
        session.spin(&mut rng).unwrap();
        clock.advance(1.0);
        session.update(1.0, screen(), &Palette::default(), &mut rng);
        assert!(session.locked());
        assert_eq!(session.remove(1), Err(EditError::Busy));
        assert_eq!(session.clear(), Err(EditError::Busy));
        assert_eq!(labels(&session), ["Ann", "Bob"]);
    }

    #[test]
    fn spin_waits_for_confirmation() {
        let (clock, mut session) = with_names(&["Ann", "Bob", "Cat"]);
        let mut rng = StdRng::seed_from_u64(30);
        spin_to_winner(&clock, &mut session, &mut rng);
        let rotation = session.wheel().rotation_degrees;
        assert_eq!(session.spin(&mut rng), Err(SpinError::WinnerPending));
        assert_eq!(session.wheel().rotation_degrees, rotation);

        session.confirm_winner();
        assert!(!session.locked());
        assert!(session.spin(&mut rng).is_ok());
    }

    #[test]
    fn edits_allowed_when_idle() {
        let (_, mut session) = with_names(&["Ann", "Bob", "Cat"]);
        assert_eq!(session.remove(1), Ok(Entry::new("Bob")));
        assert_eq!(session.remove(5), Err(EditError::NoSuchEntry(5)));
        assert_eq!(session.clear(), Ok(()));
        assert!(session.wheel().entries.is_empty());
    }

    #[test]
    fn startup_names_are_one_batch() {
        let (_, mut session) = with_names(&[]);
        let entries: Vec<String> = (0..45).map(|i| format!("e{i}")).collect();
        let names = (0..10).map(|i| format!("n{i}")).collect::<Vec<_>>().join("\n");
        assert_eq!(
            session.add_initial(&entries, Some(&names)),
            Err(EditError::Entries(EntryError::CapacityExceeded {
                max: 50,
                current: 0,
                incoming: 55,
            }))
        );
        assert!(session.wheel().entries.is_empty());

        let entries = ["Ann".to_owned(), "  ".to_owned(), "Bob".to_owned()];
        assert_eq!(session.add_initial(&entries, Some("Cat\n\n Dan ")), Ok(4));
        assert_eq!(labels(&session), ["Ann", "Bob", "Cat", "Dan"]);
    }

    #[test]
    fn typed_names_go_on_the_wheel() {
        let (_, mut session) = with_names(&["Ann"]);
        session.set_input(" Bob\n\nCat ".to_owned());
        assert_eq!(session.submit_input(), Ok(2));
        assert_eq!(labels(&session), ["Ann", "Bob", "Cat"]);
        assert_eq!(session.input(), "");
    }

    #[test]
    fn typed_names_that_dont_fit_stay_in_input() {
        let names: Vec<String> = (0..49).map(|i| i.to_string()).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let (_, mut session) = with_names(&names);
        session.set_input("x\ny".to_owned());
        assert!(matches!(
            session.submit_input(),
            Err(EditError::Entries(EntryError::CapacityExceeded { .. }))
        ));
        assert_eq!(session.input(), "x\ny");
        assert_eq!(session.wheel().entries.len(), 49);

        session.clear_input();
        assert_eq!(session.input(), "");
    }
}
