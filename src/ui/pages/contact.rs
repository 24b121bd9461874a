// SPDX-License-Identifier: MPL-2.0
//! Contact form.
//!
//! Fields are validated locally before anything is sent. Every problem found
//! is listed at once; a rejected submission keeps the visitor's input.

use super::layout::page_column;
use super::page_title;
use crate::app::config::AboutConfig;
use crate::domain::content::{ContactMessage, ContactProblem};
use crate::error::StoreError;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text, text_editor, text_input, Column};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Editing,
    Sending,
    Sent,
    Failed,
}

#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    body: text_editor::Content,
    problems: Vec<ContactProblem>,
    status: Status,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    BodyEdited(text_editor::Action),
    Submit,
    Submitted(Result<(), StoreError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The form passed validation; the caller inserts it.
    Submit(ContactMessage),
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                self.touch();
                Event::None
            }
            Message::EmailChanged(email) => {
                self.email = email;
                self.touch();
                Event::None
            }
            Message::BodyEdited(action) => {
                let is_edit = action.is_edit();
                self.body.perform(action);
                if is_edit {
                    self.touch();
                }
                Event::None
            }
            Message::Submit => {
                if self.status == Status::Sending {
                    return Event::None;
                }
                match self.draft().validated() {
                    Ok(message) => {
                        self.problems.clear();
                        self.status = Status::Sending;
                        Event::Submit(message)
                    }
                    Err(problems) => {
                        self.problems = problems;
                        Event::None
                    }
                }
            }
            Message::Submitted(Ok(())) => {
                self.name.clear();
                self.email.clear();
                self.body = text_editor::Content::new();
                self.status = Status::Sent;
                Event::None
            }
            Message::Submitted(Err(err)) => {
                tracing::warn!(error = %err, "failed to send contact message");
                self.status = Status::Failed;
                Event::None
            }
        }
    }

    /// Editing after a send result returns the form to its normal state.
    fn touch(&mut self) {
        if matches!(self.status, Status::Sent | Status::Failed) {
            self.status = Status::Editing;
        }
    }

    fn draft(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.body.text(),
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn problems(&self) -> &[ContactProblem] {
        &self.problems
    }

    pub fn view<'a>(&'a self, about: &'a AboutConfig) -> Element<'a, Message> {
        let sending = self.status == Status::Sending;

        let mut name = text_input("Your name", &self.name).padding(spacing::XS);
        let mut email = text_input("Email address", &self.email).padding(spacing::XS);
        let mut body = text_editor(&self.body)
            .placeholder("How can we help?")
            .height(180.0)
            .padding(spacing::XS);
        if !sending {
            name = name.on_input(Message::NameChanged);
            email = email.on_input(Message::EmailChanged);
            body = body.on_action(Message::BodyEdited);
        }

        let submit = button(text(if sending { "Sending…" } else { "Send message" }))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary)
            .on_press_maybe((!sending).then_some(Message::Submit));

        let mut form = column![
            labelled("Name", name.into()),
            labelled("Email", email.into()),
            labelled("Message", body.into()),
        ]
        .spacing(spacing::MD);

        if !self.problems.is_empty() {
            let list = self
                .problems
                .iter()
                .fold(Column::new().spacing(spacing::XXS), |list, problem| {
                    list.push(text(problem.describe()).size(typography::BODY))
                });
            form = form.push(notice(list.into(), false));
        }
        match self.status {
            Status::Sent => {
                form = form.push(notice(
                    text("Thank you! Your message has been sent.").into(),
                    true,
                ));
            }
            Status::Failed => {
                form = form.push(notice(
                    text("We could not send your message. Please try again later.").into(),
                    false,
                ));
            }
            Status::Editing | Status::Sending => {}
        }
        form = form.push(submit);

        let mut reach = column![text("Other ways to reach us").size(typography::TITLE_SM)]
            .spacing(spacing::XXS);
        for line in [&about.address, &about.phone, &about.email].into_iter().flatten() {
            reach = reach.push(text(line).size(typography::BODY));
        }

        page_column(vec![
            page_title("Contact us"),
            container(form)
                .padding(spacing::LG)
                .width(Length::Fill)
                .style(styles::container::card)
                .into(),
            reach.into(),
        ])
    }
}

fn labelled<'a>(label: &'a str, field: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(typography::CAPTION), field]
        .spacing(spacing::XXS)
        .into()
}

fn notice(content: Element<'_, Message>, success: bool) -> Element<'_, Message> {
    container(content)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::notice(success))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        let mut state = State::default();
        state.update(Message::NameChanged("  Ruth ".into()));
        state.update(Message::EmailChanged("ruth@example.org".into()));
        state.body = text_editor::Content::with_text("Hello from the choir");
        state
    }

    #[test]
    fn empty_form_lists_every_problem() {
        let mut state = State::default();
        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(
            state.problems(),
            &[
                ContactProblem::MissingName,
                ContactProblem::InvalidEmail,
                ContactProblem::MissingMessage
            ]
        );
        assert_eq!(state.status(), Status::Editing);
    }

    #[test]
    fn valid_form_submits_trimmed_message() {
        let mut state = filled();
        match state.update(Message::Submit) {
            Event::Submit(message) => {
                assert_eq!(message.name, "Ruth");
                assert_eq!(message.message, "Hello from the choir");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(state.status(), Status::Sending);
        assert_eq!(state.update(Message::Submit), Event::None);
    }

    #[test]
    fn success_clears_the_form() {
        let mut state = filled();
        state.update(Message::Submit);
        state.update(Message::Submitted(Ok(())));
        assert_eq!(state.status(), Status::Sent);
        assert!(state.name.is_empty());
        assert!(state.body.text().trim().is_empty());
    }

    #[test]
    fn failure_keeps_input_for_retry() {
        let mut state = filled();
        state.update(Message::Submit);
        state.update(Message::Submitted(Err(StoreError::Status {
            status: 500,
            body: "boom".into(),
        })));
        assert_eq!(state.status(), Status::Failed);
        assert_eq!(state.name, "  Ruth ");

        state.update(Message::EmailChanged("ruth@example.com".into()));
        assert_eq!(state.status(), Status::Editing);
    }
}
