//! Search and settings overlay forms.
//!
//! Forms only hold what the user is editing. Turning a submitted search form into results
//! is the application's job; the form just hands back a [`FilterCriteria`].

use crate::catalog::Catalog;
use crate::filter::{FilterCriteria, Selection};
use crate::ui::theme::ThemeName;

/// One option of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: Selection,
    pub label: String,
}

impl Choice {
    fn any(label: &str) -> Self {
        Self {
            value: Selection::Any,
            label: label.to_string(),
        }
    }
}

/// Field of the search form that currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Genre,
    Author,
}

impl SearchField {
    pub fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Genre,
            SearchField::Genre => SearchField::Author,
            SearchField::Author => SearchField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Genre => SearchField::Title,
            SearchField::Author => SearchField::Genre,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Genre => "Genre",
            SearchField::Author => "Author",
        }
    }
}

/// Search overlay state: a title buffer and two choice lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    pub focus: SearchField,
    genres: Vec<Choice>,
    authors: Vec<Choice>,
    genre_index: usize,
    author_index: usize,
}

impl SearchForm {
    /// Build choice lists from the catalog; the first option of each list means "any"
    pub fn new(catalog: &Catalog) -> Self {
        let to_choices = |label: &str, entries: Vec<(String, String)>| {
            std::iter::once(Choice::any(label))
                .chain(entries.into_iter().map(|(id, name)| Choice {
                    value: Selection::Only(id),
                    label: name,
                }))
                .collect::<Vec<_>>()
        };

        Self {
            title: String::new(),
            focus: SearchField::Title,
            genres: to_choices("All Genres", catalog.genres_by_name()),
            authors: to_choices("All Authors", catalog.authors_by_name()),
            genre_index: 0,
            author_index: 0,
        }
    }

    pub fn genres(&self) -> &[Choice] {
        &self.genres
    }

    pub fn authors(&self) -> &[Choice] {
        &self.authors
    }

    pub fn selected_genre(&self) -> &Choice {
        &self.genres[self.genre_index]
    }

    pub fn selected_author(&self) -> &Choice {
        &self.authors[self.author_index]
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Append to the title when the title field has focus
    pub fn push_char(&mut self, ch: char) {
        if self.focus == SearchField::Title {
            self.title.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if self.focus == SearchField::Title {
            self.title.pop();
        }
    }

    /// Step the focused choice list forward or backward, wrapping around
    pub fn cycle(&mut self, forward: bool) {
        let (index, len) = match self.focus {
            SearchField::Title => return,
            SearchField::Genre => (&mut self.genre_index, self.genres.len()),
            SearchField::Author => (&mut self.author_index, self.authors.len()),
        };
        *index = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
    }

    /// Select the choice whose value matches, leaving the selection alone otherwise
    pub fn select(&mut self, field: SearchField, value: &Selection) {
        let (choices, index) = match field {
            SearchField::Title => return,
            SearchField::Genre => (&self.genres, &mut self.genre_index),
            SearchField::Author => (&self.authors, &mut self.author_index),
        };
        if let Some(position) = choices.iter().position(|c| &c.value == value) {
            *index = position;
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.selected_genre().value.clone(),
            self.selected_author().value.clone(),
            self.title.clone(),
        )
    }
}

/// Settings overlay state: the theme the user is about to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsForm {
    pub pending: ThemeName,
}

impl SettingsForm {
    pub fn new(current: ThemeName) -> Self {
        Self { pending: current }
    }

    pub fn toggle(&mut self) {
        self.pending = self.pending.toggled();
    }
}
