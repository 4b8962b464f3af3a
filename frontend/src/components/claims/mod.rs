//! Insurance-claim demo flow: board, new claim, pre-authorization, tracker
//! and the claim detail page.

use gloo_console::debug;
use yew::prelude::*;

mod board;
mod detail;
mod new_claim;
mod pre_auth;
mod tracker;

use board::ClaimsBoard;
use detail::claim_detail;
use new_claim::NewClaim;
use pre_auth::PreAuth;
use tracker::Tracker;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Board,
    NewClaim,
    PreAuth,
    Tracker,
    Detail(String),
}

/// Switches between the claim screens. Each screen keeps its own state.
pub struct ClaimsFlow {
    screen: Screen,
}

impl Component for ClaimsFlow {
    type Message = Screen;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            screen: Screen::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, screen: Self::Message) -> bool {
        debug!(format!("claims screen: {:?}", screen));
        let changed = self.screen != screen;
        self.screen = screen;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let go = ctx.link().callback(|screen: Screen| screen);
        let to = |screen: Screen| go.reform(move |_: ()| screen.clone());

        match &self.screen {
            Screen::Board => html! {
                <ClaimsBoard
                    on_view={go.reform(Screen::Detail)}
                    on_new={to(Screen::NewClaim)}
                    on_track={to(Screen::Tracker)}
                />
            },
            Screen::NewClaim => html! {
                <NewClaim
                    on_pre_auth={to(Screen::PreAuth)}
                    on_done={to(Screen::Board)}
                    on_back={to(Screen::Board)}
                />
            },
            Screen::PreAuth => html! {
                <PreAuth on_back={to(Screen::NewClaim)} on_submitted={to(Screen::Tracker)} />
            },
            Screen::Tracker => html! {
                <Tracker on_view={go.reform(Screen::Detail)} on_back={to(Screen::Board)} />
            },
            Screen::Detail(id) => claim_detail(id, to(Screen::Board)),
        }
    }
}
