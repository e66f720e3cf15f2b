//! One function per route view. Form inputs edit their fields in place; every
//! other interaction is queued as a [`UiAction`].

use client_core::{pages, router::anecdote_path, CreateForm, FormField};
use crossbeam_channel::Sender;
use eframe::egui;
use shared::domain::Anecdote;

use crate::controller::{events::UiAction, orchestration::dispatch_ui_action};
use crate::ui::widgets::field_input;

pub fn show_list(ui: &mut egui::Ui, anecdotes: &[Anecdote], action_tx: &Sender<UiAction>) {
    ui.heading("Anecdotes");
    ui.add_space(6.0);
    for anecdote in anecdotes {
        ui.horizontal(|ui| {
            ui.label("•");
            if ui.link(anecdote.content.as_str()).clicked() {
                dispatch_ui_action(action_tx, UiAction::Navigate(anecdote_path(anecdote.id)));
            }
        });
    }
}

pub fn show_anecdote(ui: &mut egui::Ui, anecdote: Option<&Anecdote>, action_tx: &Sender<UiAction>) {
    // An unknown id renders nothing.
    let Some(anecdote) = anecdote else {
        return;
    };

    ui.heading(anecdote.content.as_str());
    ui.label(egui::RichText::new(format!("by {}", anecdote.author)).weak());
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(format!("has {} votes", anecdote.votes));
        if ui.button("vote").clicked() {
            dispatch_ui_action(action_tx, UiAction::Vote(anecdote.id));
        }
    });
    if !anecdote.info.is_empty() {
        ui.horizontal_wrapped(|ui| {
            ui.label("for more info see");
            ui.hyperlink(&anecdote.info);
        });
    }
}

pub fn show_create_form(ui: &mut egui::Ui, form: &mut CreateForm, action_tx: &Sender<UiAction>) {
    ui.heading("create a new anecdote");
    ui.add_space(6.0);

    for (field, id) in FormField::ALL.into_iter().zip(["create_content", "create_author", "create_info"]) {
        field_input(ui, id, field.label(), form.field_mut(field).binding());
        ui.add_space(4.0);
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("create").clicked() {
            dispatch_ui_action(action_tx, UiAction::SubmitAnecdote);
        }
        if ui.button("reset").clicked() {
            dispatch_ui_action(action_tx, UiAction::ResetForm);
        }
    });
}

pub fn show_about(ui: &mut egui::Ui) {
    ui.heading(pages::ABOUT_TITLE);
    ui.label(pages::ABOUT_INTRO);
    ui.add_space(4.0);
    ui.label(egui::RichText::new(pages::ABOUT_QUOTE).italics());
    ui.add_space(4.0);
    ui.label(pages::ABOUT_OUTRO);
}

pub fn show_footer(ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.label(pages::FOOTER_PREFIX);
        ui.hyperlink_to(pages::FOOTER_COURSE_LABEL, pages::FOOTER_COURSE_URL);
        ui.label(". See");
        ui.hyperlink(pages::FOOTER_SOURCE_URL);
        ui.label("for the source code.");
    });
}
