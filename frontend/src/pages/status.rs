use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    NotFound,
    ServerError,
    Maintenance,
    ComingSoon,
    Success,
    Unauthorized,
}

/// What the primary button does for a given status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusAction {
    GoHome,
    Reload,
    Nothing,
}

pub struct StatusContent {
    pub icon: &'static str,
    pub tone: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

impl StatusKind {
    pub fn content(&self) -> StatusContent {
        match self {
            StatusKind::NotFound => StatusContent {
                icon: "⚠",
                tone: "warning",
                title: "Oops! Did someone say window cleaning?",
                message: "Because this page seems to have vanished into thin air! Let's get you back on track.",
                action: "Back to Homepage",
            },
            StatusKind::ServerError => StatusContent {
                icon: "⚠",
                tone: "danger",
                title: "Well, this is embarrassing...",
                message: "Our systems are having a moment. Give us a second to polish things up!",
                action: "Try Again",
            },
            StatusKind::Maintenance => StatusContent {
                icon: "🚧",
                tone: "info",
                title: "Quick Clean-up in Progress!",
                message: "Just like a spotless window, we'll be crystal clear again very soon.",
                action: "Check Status",
            },
            StatusKind::ComingSoon => StatusContent {
                icon: "🕗",
                tone: "info",
                title: "Something Sparkling is Coming!",
                message: "We're putting the finishing touches on something special.",
                action: "Notify Me",
            },
            StatusKind::Success => StatusContent {
                icon: "✔",
                tone: "success",
                title: "Everything's Crystal Clear!",
                message: "Your request has been successfully processed.",
                action: "View Details",
            },
            StatusKind::Unauthorized => StatusContent {
                icon: "⚠",
                tone: "caution",
                title: "Hold Up! VIP Area",
                message: "Looks like you need special access for this area. Let's get you sorted.",
                action: "Login",
            },
        }
    }

    // The site has no login page, so unauthorized falls back to home.
    pub fn action(&self) -> StatusAction {
        match self {
            StatusKind::NotFound | StatusKind::Unauthorized => StatusAction::GoHome,
            StatusKind::ServerError => StatusAction::Reload,
            StatusKind::Maintenance | StatusKind::ComingSoon | StatusKind::Success => StatusAction::Nothing,
        }
    }

    pub fn shows_home_button(&self) -> bool {
        *self != StatusKind::NotFound
    }

    pub fn footnote(&self) -> Option<&'static str> {
        match self {
            StatusKind::Maintenance => Some("Estimated completion: 2 hours"),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusPageProps {
    pub kind: StatusKind,
}

#[function_component(StatusPage)]
pub fn status_page(props: &StatusPageProps) -> Html {
    let navigator = use_navigator();
    let kind = props.kind;
    let content = kind.content();

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let on_action = {
        let go_home = go_home.clone();
        Callback::from(move |e: MouseEvent| match kind.action() {
            StatusAction::GoHome => go_home.emit(e),
            StatusAction::Reload => {
                info!("Reloading after server error");
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().reload() {
                        warn!("Reload failed: {:?}", e);
                    }
                }
            }
            StatusAction::Nothing => {}
        })
    };

    html! {
        <div class="status-page">
            <style>
                {r#"
                .status-page {
                    min-height: 100vh;
                    background: #f9fafb;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .status-card {
                    max-width: 28rem;
                    width: 100%;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                }
                .status-icon {
                    font-size: 4rem;
                    margin-bottom: 1rem;
                }
                .status-icon.warning { color: #eab308; }
                .status-icon.danger { color: #ef4444; }
                .status-icon.info { color: #3b82f6; }
                .status-icon.success { color: #22c55e; }
                .status-icon.caution { color: #f97316; }
                .status-card h1 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin: 0 0 1rem;
                }
                .status-card p {
                    color: #4b5563;
                    margin: 0 0 2rem;
                }
                .status-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }
                .status-button {
                    padding: 0.5rem 1rem;
                    border-radius: 0.375rem;
                    border: none;
                    background: #111827;
                    color: #fff;
                    cursor: pointer;
                }
                .status-button.outline {
                    background: #fff;
                    color: #111827;
                    border: 1px solid #d1d5db;
                }
                .status-button.success {
                    background: #22c55e;
                }
                .status-button.success:hover {
                    background: #16a34a;
                }
                .status-footnote {
                    margin-top: 2rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                "#}
            </style>
            <div class="status-card">
                <div class={classes!("status-icon", content.tone)}>{content.icon}</div>
                <h1>{content.title}</h1>
                <p>{content.message}</p>
                <div class="status-actions">
                    if kind.shows_home_button() {
                        <button class="status-button outline" onclick={go_home}>{"⌂ Home"}</button>
                    }
                    <button
                        class={classes!("status-button", (kind == StatusKind::Success).then(|| "success"))}
                        onclick={on_action}
                    >
                        if kind == StatusKind::ServerError {
                            {"↻ "}
                        }
                        {content.action}
                    </button>
                </div>
                if let Some(note) = kind.footnote() {
                    <div class="status-footnote">{note}</div>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 6] = [
        StatusKind::NotFound,
        StatusKind::ServerError,
        StatusKind::Maintenance,
        StatusKind::ComingSoon,
        StatusKind::Success,
        StatusKind::Unauthorized,
    ];

    #[test]
    fn only_not_found_hides_home_button() {
        for kind in ALL {
            assert_eq!(kind.shows_home_button(), kind != StatusKind::NotFound);
        }
    }

    #[test]
    fn actions() {
        assert_eq!(StatusKind::NotFound.action(), StatusAction::GoHome);
        assert_eq!(StatusKind::ServerError.action(), StatusAction::Reload);
        assert_eq!(StatusKind::Unauthorized.action(), StatusAction::GoHome);
        assert_eq!(StatusKind::Maintenance.action(), StatusAction::Nothing);
        assert_eq!(StatusKind::ComingSoon.action(), StatusAction::Nothing);
        assert_eq!(StatusKind::Success.action(), StatusAction::Nothing);
    }

    #[test]
    fn maintenance_alone_has_a_footnote() {
        for kind in ALL {
            assert_eq!(kind.footnote().is_some(), kind == StatusKind::Maintenance);
        }
        assert_eq!(StatusKind::Maintenance.footnote(), Some("Estimated completion: 2 hours"));
    }

    #[test]
    fn copy_for_missing_page() {
        let content = StatusKind::NotFound.content();
        assert_eq!(content.title, "Oops! Did someone say window cleaning?");
        assert_eq!(content.action, "Back to Homepage");
    }
}
