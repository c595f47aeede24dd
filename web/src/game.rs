use pixelhunt_core as game;
use yew::prelude::*;

use crate::compass::Compass;
use crate::utils::js_random_seed;

/// View adapter over the core session: everything the markup needs,
/// kept free of yew types so it stays testable off-browser.
#[derive(Clone, Debug, PartialEq)]
struct Round {
    session: game::GameSession,
}

impl Round {
    fn new(seed: u64) -> Self {
        let session = game::GameSession::new(
            game::GameConfig::default(),
            game::RandomTargetPicker::new(seed),
        );
        Self { session }
    }

    fn dimension(&self) -> game::Coord {
        self.session.config().dimension()
    }

    fn counter_text(&self) -> String {
        format!(
            "Clicks: {}/{}",
            self.session.attempts(),
            self.session.config().max_attempts()
        )
    }

    fn state_class(&self) -> &'static str {
        match self.session.status() {
            game::GameStatus::Playing => "in-progress",
            game::GameStatus::Won => "win",
            game::GameStatus::Lost => "lose",
        }
    }

    fn outcome_text(&self) -> Option<String> {
        match self.session.status() {
            game::GameStatus::Playing => None,
            game::GameStatus::Won => Some(format!(
                "You won! Found it in {} tries!",
                self.session.attempts()
            )),
            game::GameStatus::Lost => Some("Game Over! No more tries left.".to_string()),
        }
    }

    /// The target is painted only once it has been found.
    fn is_target_shown(&self, index: game::CellIndex) -> bool {
        matches!(self.session.status(), game::GameStatus::Won) && index == self.session.target()
    }

    /// Compass angle after a wrong guess; nothing before the first guess,
    /// after a win, or once the round is over.
    fn hint(&self) -> Option<f64> {
        if !self.session.status().is_playing() {
            return None;
        }
        self.session.hint_bearing()
    }

    fn is_playable(&self) -> bool {
        self.session.status().is_playing()
    }

    /// Forwards one activation to the core. Returns whether anything the
    /// view shows could have changed.
    fn click(&mut self, index: game::CellIndex) -> bool {
        if self.session.is_finished() {
            log::trace!("click {} ignored, round is over", index);
            return false;
        }

        match self.session.guess(index) {
            Ok(status) => {
                log::debug!("guessed {} -> {:?}", index, status);
                true
            }
            Err(err) => {
                // the grid never produces out-of-range indices
                log::warn!("rejected guess {}: {}", index, err);
                false
            }
        }
    }

    fn reset(&mut self, seed: u64) {
        self.session.reset(game::RandomTargetPicker::new(seed));
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClicked(game::CellIndex),
    NewGame,
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    pub seed: Option<u64>,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::CellIndex,
    marked: bool,
    playable: bool,
    callback: Callback<game::CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        marked,
        playable,
        callback,
    } = props.clone();

    let class = classes!("cell", marked.then_some("found"));

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("cell {} click", index);
            callback.emit(index);
        })
    };

    let ontouchstart = {
        let callback = callback.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            log::trace!("cell {} touch", index);
            callback.emit(index);
        })
    };

    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" || e.key() == " " {
            e.prevent_default();
            log::trace!("cell {} key activate", index);
            callback.emit(index);
        }
    });

    let tabindex = playable.then_some("0");

    html! {
        <td {class} role="button" {tabindex} {onclick} {ontouchstart} {onkeydown}/>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    round: Round,
    forced_seed: Option<u64>,
}

impl GameView {
    fn next_seed(&self) -> u64 {
        self.forced_seed.unwrap_or_else(js_random_seed)
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let forced_seed = ctx.props().seed;
        let seed = forced_seed.unwrap_or_else(js_random_seed);
        Self {
            round: Round::new(seed),
            forced_seed,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CellClicked(index) => self.round.click(index),
            Msg::NewGame => {
                let seed = self.next_seed();
                log::debug!("new game (seed {})", seed);
                self.round.reset(seed);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let dimension = self.round.dimension();
        let playable = self.round.is_playable();
        let state_class = self.round.state_class();
        let callback = ctx.link().callback(Msg::CellClicked);

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class={classes!("pixelhunt", state_class)}>
                <h1>{"Pixel Hunter"}</h1>
                <div class="counter">{self.round.counter_text()}</div>
                if let Some(angle) = self.round.hint() {
                    <Compass {angle}/>
                }
                <table class={playable.then_some("playable")}>
                    {
                        for (0..dimension).map(|y| html! {
                            <tr>
                                {
                                    for (0..dimension).map(|x| {
                                        let index = game::to_index((x, y), dimension);
                                        let marked = self.round.is_target_shown(index);
                                        html! {
                                            <CellView
                                                {index}
                                                {marked}
                                                {playable}
                                                callback={callback.clone()}
                                            />
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                if let Some(outcome) = self.round.outcome_text() {
                    <div class="outcome">{outcome}</div>
                }
                if !playable {
                    <button class="new-game" onclick={cb_new_game}>{"New Game"}</button>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Seeded round plus the target it drew, so tests can hit or miss it
    /// on purpose.
    fn round() -> (Round, game::CellIndex) {
        let round = Round::new(42);
        let target = round.session.target();
        (round, target)
    }

    fn miss(target: game::CellIndex) -> game::CellIndex {
        if target == 0 {
            1
        } else {
            0
        }
    }

    #[test]
    fn fresh_round_shows_zero_counter_and_no_hint() {
        let (round, _) = round();
        assert_eq!(round.counter_text(), "Clicks: 0/100");
        assert_eq!(round.hint(), None);
        assert_eq!(round.outcome_text(), None);
        assert_eq!(round.state_class(), "in-progress");
        assert!(round.is_playable());
    }

    #[test]
    fn wrong_guess_shows_a_hint_and_bumps_the_counter() {
        let (mut round, target) = round();
        assert!(round.click(miss(target)));
        assert_eq!(round.counter_text(), "Clicks: 1/100");
        assert!(round.hint().is_some());
    }

    #[test]
    fn winning_click_reveals_the_target_and_suppresses_the_hint() {
        let (mut round, target) = round();
        assert!(round.click(target));

        assert_eq!(round.state_class(), "win");
        assert_eq!(
            round.outcome_text().as_deref(),
            Some("You won! Found it in 1 tries!")
        );
        assert!(round.is_target_shown(target));
        assert!(!round.is_target_shown(miss(target)));
        assert_eq!(round.hint(), None);
        assert!(!round.is_playable());
    }

    #[test]
    fn target_is_hidden_while_the_round_is_live() {
        let (mut round, target) = round();
        assert!(!round.is_target_shown(target));
        round.click(miss(target));
        assert!(!round.is_target_shown(target));
    }

    #[test]
    fn exhausted_round_shows_the_loss_banner_and_ignores_clicks() {
        let (mut round, target) = round();
        let mut index = 0;
        for _ in 0..100 {
            if index == target {
                index += 1;
            }
            round.click(index);
            index += 1;
        }

        assert_eq!(round.state_class(), "lose");
        assert_eq!(
            round.outcome_text().as_deref(),
            Some("Game Over! No more tries left.")
        );
        assert_eq!(round.hint(), None);

        assert!(!round.click(target));
        assert_eq!(round.counter_text(), "Clicks: 100/100");
    }

    #[test]
    fn reset_starts_a_fresh_playable_round() {
        let (mut round, target) = round();
        round.click(target);
        assert!(!round.is_playable());

        round.reset(7);
        assert!(round.is_playable());
        assert_eq!(round.counter_text(), "Clicks: 0/100");
        assert_eq!(round.hint(), None);
    }

    #[test]
    fn same_seed_draws_the_same_round() {
        assert_eq!(Round::new(42), Round::new(42));
    }
}
