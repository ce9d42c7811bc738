//! One recipe card and its instruction toggle.
//!
//! A card is `collapsed` until its instructions block exists. Activating the
//! button on a collapsed card asks for the recipe detail and flips the label
//! to "Hide Instructions" right away; the block only appears once a detail
//! response with text arrives. Activating an expanded card removes the block
//! without any request.

use crate::api::{ApiError, RecipeDetail, RecipeSummary};

use super::instructions;

pub const SHOW_INSTRUCTIONS: &str = "Show Instructions";
pub const HIDE_INSTRUCTIONS: &str = "Hide Instructions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleLabel {
    #[default]
    Show,
    Hide,
}

impl ToggleLabel {
    pub fn text(self) -> &'static str {
        match self {
            ToggleLabel::Show => SHOW_INSTRUCTIONS,
            ToggleLabel::Hide => HIDE_INSTRUCTIONS,
        }
    }
}

/// What the caller must do after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// The block was removed; nothing to send
    Collapsed,
    /// Fetch the detail for this recipe and register the request id
    FetchDetail { recipe_id: u64 },
}

/// The visible pieces of a card, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardElement<'a> {
    Title(&'a str),
    Image(&'a str),
    Ingredient(&'a str),
    ToggleButton(&'static str),
    Instructions(&'a str),
}

#[derive(Debug, Clone)]
pub struct RecipeCard {
    summary: RecipeSummary,
    label: ToggleLabel,
    instructions: Option<String>,
    pending_detail: Option<u64>,
}

impl RecipeCard {
    pub fn new(summary: RecipeSummary) -> Self {
        Self {
            summary,
            label: ToggleLabel::Show,
            instructions: None,
            pending_detail: None,
        }
    }

    #[cfg(test)]
    pub fn summary(&self) -> &RecipeSummary {
        &self.summary
    }

    pub fn recipe_id(&self) -> u64 {
        self.summary.id
    }

    pub fn label(&self) -> ToggleLabel {
        self.label
    }

    #[cfg(test)]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    #[cfg(test)]
    pub fn is_expanded(&self) -> bool {
        self.instructions.is_some()
    }

    pub fn pending_detail(&self) -> Option<u64> {
        self.pending_detail
    }

    /// Activate the toggle button
    pub fn toggle(&mut self) -> ToggleAction {
        if self.instructions.is_some() {
            self.instructions = None;
            self.label = ToggleLabel::Show;
            self.pending_detail = None;
            ToggleAction::Collapsed
        } else {
            self.label = ToggleLabel::Hide;
            ToggleAction::FetchDetail {
                recipe_id: self.summary.id,
            }
        }
    }

    /// Remember the id of the detail request sent for this card
    ///
    /// Replaces any earlier pending id, so only the newest fetch can land.
    pub fn await_detail(&mut self, request_id: u64) {
        self.pending_detail = Some(request_id);
    }

    /// Apply a detail response, returning true when the block was added
    pub fn apply_detail(&mut self, request_id: u64, result: Result<RecipeDetail, ApiError>) -> bool {
        if self.pending_detail != Some(request_id) {
            return false;
        }
        self.pending_detail = None;

        match result {
            Ok(detail) => match detail.instructions() {
                Some(text) if self.instructions.is_none() => {
                    self.instructions = Some(instructions::to_plain_text(text));
                    true
                }
                Some(_) => false,
                None => {
                    log::info!("Recipe {} has no instructions", self.summary.id);
                    false
                }
            },
            Err(ApiError::Cancelled) => false,
            Err(e) => {
                log::error!("Error fetching recipe instructions: {}", e);
                false
            }
        }
    }

    pub fn elements(&self) -> Vec<CardElement<'_>> {
        let mut elements = vec![CardElement::Title(&self.summary.title)];

        if let Some(image) = self.summary.image.as_deref() {
            elements.push(CardElement::Image(image));
        }

        elements.extend(
            self.summary
                .used_ingredients
                .iter()
                .map(|ingredient| CardElement::Ingredient(ingredient.description())),
        );

        elements.push(CardElement::ToggleButton(self.label.text()));

        if let Some(text) = self.instructions.as_deref() {
            elements.push(CardElement::Instructions(text));
        }

        elements
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod card_tests;
