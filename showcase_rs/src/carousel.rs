//! Snippet carousel.
//!
//! Owns the selected index, the transcript currently shown and its
//! highlighted rendering. Highlighting is asynchronous: [`Carousel::advance`]
//! hands back a [`ConversionRequest`] that the caller runs through a
//! [`Highlighter`] (see [`convert`]) and feeds back with [`Carousel::resolve`].
//!
//! Requests are fenced. Every request carries a [`Ticket`] with a monotonic
//! sequence number, and only the result for the latest ticket is applied.
//! A slow conversion that finishes after a newer one is dropped, so the
//! display never reverts to a snippet the visitor already navigated away
//! from.

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::content::{Annotation, Deck};
use crate::error::HighlightError;
use crate::highlight::{HighlightOptions, Highlighter, plain_markup};
use crate::site::{CarouselConfig, FailurePolicy};

/// Navigation input. The page exposes exactly these two actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    pub fn offset(self) -> isize {
        match self {
            Step::Previous => -1,
            Step::Next => 1,
        }
    }
}

/// `(index + step) mod len`, wrapping at both ends.
pub fn wrap_index(index: usize, step: Step, len: usize) -> usize {
    debug_assert!(len > 0, "deck is never empty");
    (index as isize + step.offset()).rem_euclid(len as isize) as usize
}

/// Identity of one conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Work order for the highlighting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub ticket: Ticket,
    pub text: String,
    pub options: HighlightOptions,
}

/// A finished conversion, tagged with the request it answers.
#[derive(Debug)]
pub struct Conversion {
    pub ticket: Ticket,
    pub text: String,
    pub outcome: Result<String, HighlightError>,
}

/// Run one request through a highlighter.
pub async fn convert<H>(highlighter: &H, request: ConversionRequest) -> Conversion
where
    H: Highlighter + ?Sized,
{
    let outcome = highlighter.highlight(&request.text, &request.options).await;
    Conversion {
        ticket: request.ticket,
        text: request.text,
        outcome,
    }
}

/// What happened to a conversion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The markup is now on display.
    Applied,
    /// A newer request was issued; the result was dropped.
    Superseded,
    /// The latest request failed and the failure policy was applied.
    Failed,
}

/// Snapshot handed to listeners and to the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    pub selected_index: usize,
    pub raw_text: String,
    /// Markup for the last applied conversion. Stale while `is_converting`.
    pub rendered_markup: String,
    pub is_converting: bool,
    pub annotation: Annotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&CarouselState) + Send + Sync>;

pub struct Carousel {
    deck: Deck,
    config: CarouselConfig,
    state: CarouselState,
    latest: Ticket,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("deck_len", &self.deck.len())
            .field("state", &self.state)
            .field("latest", &self.latest)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Carousel {
    /// Fresh carousel on the first snippet, in the loading state. Call
    /// [`Carousel::mount`] to get the first conversion request.
    pub fn new(deck: Deck, config: CarouselConfig) -> Self {
        let state = snapshot_at(&deck, 0, String::new());
        Self {
            deck,
            config,
            state,
            latest: Ticket(0),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Page-view mount: select the first snippet and request its markup.
    pub fn mount(&mut self) -> ConversionRequest {
        debug!(snippets = self.deck.len(), "carousel mounted");
        self.select(0)
    }

    /// Move one snippet forward or back, wrapping at either end.
    pub fn advance(&mut self, step: Step) -> ConversionRequest {
        let index = wrap_index(self.state.selected_index, step, self.deck.len());
        debug!(from = self.state.selected_index, to = index, ?step, "carousel advance");
        self.select(index)
    }

    /// Apply `markup` if it answers the latest request for the text on
    /// display. Anything else is dropped.
    pub fn on_conversion_complete(
        &mut self,
        ticket: Ticket,
        for_text: &str,
        markup: String,
    ) -> Resolution {
        if !self.is_current(ticket, for_text) {
            trace!(ticket = ticket.seq(), latest = self.latest.seq(), "dropping stale markup");
            return Resolution::Superseded;
        }
        self.state.rendered_markup = markup;
        self.state.is_converting = false;
        debug!(index = self.state.selected_index, "snippet markup applied");
        self.notify();
        Resolution::Applied
    }

    /// Handle a failed conversion according to the configured policy.
    pub fn on_conversion_failed(
        &mut self,
        ticket: Ticket,
        for_text: &str,
        error: &HighlightError,
    ) -> Resolution {
        if !self.is_current(ticket, for_text) {
            trace!(ticket = ticket.seq(), "dropping stale failure");
            return Resolution::Superseded;
        }
        warn!(
            index = self.state.selected_index,
            policy = ?self.config.on_failure,
            "snippet highlighting failed: {}",
            error
        );
        match self.config.on_failure {
            FailurePolicy::KeepLoading => {}
            FailurePolicy::PlainText => {
                self.state.rendered_markup = plain_markup(&self.state.raw_text);
                self.state.is_converting = false;
                self.notify();
            }
        }
        Resolution::Failed
    }

    /// Feed a finished [`Conversion`] back in.
    pub fn resolve(&mut self, conversion: Conversion) -> Resolution {
        let Conversion {
            ticket,
            text,
            outcome,
        } = conversion;
        match outcome {
            Ok(markup) => self.on_conversion_complete(ticket, &text, markup),
            Err(error) => self.on_conversion_failed(ticket, &text, &error),
        }
    }

    /// Register a listener. It is called right away with the current state
    /// and again after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CarouselState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        listener(&self.state);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn latest_ticket(&self) -> Ticket {
        self.latest
    }

    fn select(&mut self, index: usize) -> ConversionRequest {
        let markup = std::mem::take(&mut self.state.rendered_markup);
        self.state = snapshot_at(&self.deck, index, markup);
        self.latest = Ticket(self.latest.0 + 1);
        self.notify();
        ConversionRequest {
            ticket: self.latest,
            text: self.state.raw_text.clone(),
            options: self.config.highlight.clone(),
        }
    }

    fn is_current(&self, ticket: Ticket, for_text: &str) -> bool {
        ticket == self.latest && for_text == self.state.raw_text
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}

fn snapshot_at(deck: &Deck, index: usize, rendered_markup: String) -> CarouselState {
    CarouselState {
        selected_index: index,
        raw_text: deck.snippet(index).unwrap_or_default().to_string(),
        rendered_markup,
        is_converting: true,
        annotation: deck
            .annotation(index)
            .cloned()
            .unwrap_or_else(|| Annotation::new("", "")),
    }
}
