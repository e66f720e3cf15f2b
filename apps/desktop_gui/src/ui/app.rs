use client_core::{
    pages,
    router::{ABOUT_PATH, CREATE_PATH, LIST_PATH},
    Notification, Route, View,
};
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use tokio::{runtime::Handle, sync::watch, task::JoinHandle};

use crate::controller::{
    events::UiAction,
    orchestration::dispatch_ui_action,
    reducer::{apply_action, GuiState},
};
use crate::ui::{views, widgets::notification_banner};

const UI_ACTION_QUEUE_CAPACITY: usize = 256;

pub struct DesktopGuiApp {
    state: GuiState,
    action_tx: Sender<UiAction>,
    action_rx: Receiver<UiAction>,
    notification_watcher: JoinHandle<()>,
}

impl DesktopGuiApp {
    pub fn new(state: GuiState, runtime: &Handle, ctx: egui::Context) -> Self {
        let (action_tx, action_rx) = bounded(UI_ACTION_QUEUE_CAPACITY);
        // The dismissal timer fires off the UI thread; the watcher wakes the
        // window so a cleared banner disappears without user input.
        let notification_watcher = spawn_notification_watcher(
            runtime,
            state.app.notifications().subscribe(),
            move || ctx.request_repaint(),
        );
        Self {
            state,
            action_tx,
            action_rx,
            notification_watcher,
        }
    }

    fn process_ui_actions(&mut self) -> bool {
        let mut applied = false;
        while let Ok(action) = self.action_rx.try_recv() {
            apply_action(&mut self.state, action);
            applied = true;
        }
        applied
    }

    fn show_menu(&self, ui: &mut egui::Ui) {
        let current = self.state.current_route();
        ui.horizontal(|ui| {
            for (label, path, route) in [
                ("anecdotes", LIST_PATH, Route::List),
                ("create new", CREATE_PATH, Route::Create),
                ("about", ABOUT_PATH, Route::About),
            ] {
                let text = if current == Some(route) {
                    egui::RichText::new(label).strong()
                } else {
                    egui::RichText::new(label)
                };
                if ui.link(text).clicked() {
                    dispatch_ui_action(&self.action_tx, UiAction::Navigate(path.to_string()));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(egui::RichText::new(self.state.navigator.location().as_str()).weak());
                if ui
                    .add_enabled(self.state.navigator.can_go_back(), egui::Button::new("back"))
                    .clicked()
                {
                    dispatch_ui_action(&self.action_tx, UiAction::Back);
                }
            });
        });
    }

    fn show_notification(&self, ui: &mut egui::Ui) {
        let message = self.state.app.notification();
        if message.is_empty() {
            return;
        }
        ui.add_space(6.0);
        if notification_banner(ui, &message) {
            dispatch_ui_action(&self.action_tx, UiAction::DismissNotification);
        }
    }

    fn show_route(&mut self, ui: &mut egui::Ui) {
        // The form is edited in place, so it is drawn before the read-only views borrow state.
        if self.state.current_route() == Some(Route::Create) {
            views::show_create_form(ui, &mut self.state.form, &self.action_tx);
            return;
        }
        match self.state.current_view() {
            View::List(anecdotes) => views::show_list(ui, anecdotes, &self.action_tx),
            View::About => views::show_about(ui),
            View::Anecdote(anecdote) => views::show_anecdote(ui, anecdote, &self.action_tx),
            View::Create | View::NotFound => {}
        }
    }
}

impl Drop for DesktopGuiApp {
    fn drop(&mut self) {
        self.notification_watcher.abort();
    }
}

/// Calls `on_change` every time the notification is shown or cleared. Ends
/// when the scheduler is dropped.
fn spawn_notification_watcher(
    runtime: &Handle,
    mut notifications: watch::Receiver<Notification>,
    on_change: impl Fn() + Send + 'static,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        while notifications.changed().await.is_ok() {
            on_change();
        }
        tracing::debug!("notification watcher stopped");
    })
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.process_ui_actions() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            views::show_footer(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(pages::APP_TITLE);
            ui.add_space(4.0);
            self.show_menu(ui);
            self.show_notification(ui);
            ui.separator();
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.show_route(ui));
        });

        if !self.action_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::spawn_notification_watcher;
    use client_core::NotificationScheduler;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use std::time::Duration;
    use tokio::runtime::Handle;

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn watcher_wakes_on_show_and_on_timed_clear() {
        let runtime = Handle::current();
        let mut scheduler = NotificationScheduler::new(runtime.clone());
        let wakeups = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakeups);
        let watcher = spawn_notification_watcher(&runtime, scheduler.subscribe(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        settle().await;
        assert_eq!(wakeups.load(Ordering::SeqCst), 0);

        scheduler.notify("shown", Duration::from_millis(500));
        settle().await;
        assert_eq!(wakeups.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(501)).await;
        settle().await;
        assert_eq!(scheduler.message(), "");
        assert_eq!(wakeups.load(Ordering::SeqCst), 2);

        drop(scheduler);
        settle().await;
        assert!(watcher.is_finished());
    }
}
