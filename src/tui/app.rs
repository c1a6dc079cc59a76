//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::config::settings::Settings;
use crate::error::ProfitFirstError;
use crate::models::AccountRegistry;
use crate::provider::PaymentProvider;
use crate::services::{BalanceService, Dashboard, PendingTransfer, SetupService, TransferService};
use crate::storage::Storage;

use super::event::{ApiEvent, Event};
use super::views::dashboard::DashboardState;
use super::views::setup::SetupFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Dashboard,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveDialog {
    #[default]
    None,
    ConfirmTransfer(PendingTransfer),
}

/// Main application state
pub struct App<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,

    /// Runtime the provider calls are spawned on
    runtime: Handle,
    provider: Option<Arc<dyn PaymentProvider>>,
    events: mpsc::Sender<Event>,

    pub should_quit: bool,
    pub screen: Screen,
    pub active_dialog: ActiveDialog,

    pub setup_form: SetupFormState,
    /// Present once setup is complete
    pub dashboard: Option<DashboardState>,

    /// Provider calls that haven't reported back yet
    pub in_flight: usize,

    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    pub fn new(
        storage: &'a Storage,
        settings: &'a Settings,
        runtime: Handle,
        provider: Option<Arc<dyn PaymentProvider>>,
        events: mpsc::Sender<Event>,
    ) -> Self {
        let drafts = storage.accounts.get_all();

        let mut app = Self {
            storage,
            settings,
            runtime,
            provider,
            events,
            should_quit: false,
            screen: Screen::Setup,
            active_dialog: ActiveDialog::None,
            setup_form: SetupFormState::from_accounts(drafts.as_deref().unwrap_or_default()),
            dashboard: None,
            in_flight: 0,
            notifications: NotificationQueue::new(),
        };

        match drafts.and_then(|_| storage.accounts.registry()) {
            Ok(registry) => app.open_dashboard(registry),
            Err(ProfitFirstError::SetupRequired) => {}
            Err(e) => app.notify_error(e.to_string()),
        }

        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::success(message));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::error(message));
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    fn open_dashboard(&mut self, registry: AccountRegistry) {
        let session = Dashboard::new(
            registry,
            self.settings.percentages,
            self.settings.transfer_routes.clone(),
        );
        self.dashboard = Some(DashboardState::new(session));
        self.screen = Screen::Dashboard;
    }

    /// Save the form and try to finish setup
    ///
    /// On a missing field the screen stays put and the error is shown.
    pub fn submit_setup(&mut self) {
        let service = SetupService::new(self.storage);

        let drafts = match service.drafts() {
            Ok(drafts) => self.setup_form.apply_to(drafts),
            Err(e) => return self.notify_error(e.to_string()),
        };

        let result = service
            .save_drafts(drafts)
            .and_then(|()| service.complete());

        match result {
            Ok(registry) => {
                self.notify_success("Account setup completed");
                self.open_dashboard(registry);
            }
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    fn provider(&mut self) -> Option<Arc<dyn PaymentProvider>> {
        if self.provider.is_none() {
            self.notify_error(format!(
                "No payment provider configured. Set {} and restart.",
                crate::provider::token::TOKEN_ENV
            ));
        }
        self.provider.clone()
    }

    /// Start a balance check; the result arrives as an [`ApiEvent`]
    pub fn check_balance(&mut self) {
        let Some(provider) = self.provider() else {
            return;
        };
        let service = BalanceService::new(provider);
        let sender = self.events.clone();

        self.in_flight += 1;
        self.runtime.spawn(async move {
            let result = service.fetch().await;
            let _ = sender.send(Event::Api(ApiEvent::Balance(result)));
        });
    }

    /// Stage a transfer into the selected account and ask for confirmation
    pub fn stage_selected_transfer(&mut self) {
        let Some(provider) = self.provider() else {
            return;
        };
        let Some(dashboard) = self.dashboard.as_ref() else {
            return;
        };
        let Some(to) = dashboard.selected_account().cloned() else {
            return;
        };

        let transfers = TransferService::new(provider, self.settings.provider.currency.clone());
        match dashboard.session.stage_transfer_to(&transfers, &to) {
            Ok(pending) => self.active_dialog = ActiveDialog::ConfirmTransfer(pending),
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    /// Submit the transfer in the confirm dialog
    pub fn confirm_transfer(&mut self) {
        let ActiveDialog::ConfirmTransfer(pending) = std::mem::take(&mut self.active_dialog) else {
            return;
        };
        let Some(provider) = self.provider() else {
            return;
        };
        let service = TransferService::new(provider, self.settings.provider.currency.clone());
        let sender = self.events.clone();

        self.in_flight += 1;
        self.runtime.spawn(async move {
            let result = service.submit(&pending).await;
            let _ = sender.send(Event::Api(ApiEvent::Transfer { pending, result }));
        });
    }

    /// Apply the outcome of a provider call
    pub fn apply_api_event(&mut self, event: ApiEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match event {
            ApiEvent::Balance(Ok(balance)) => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.session.set_balance(balance);
                }
                self.notify_success(format!(
                    "Balance: {}",
                    balance.format_with_symbol(&self.settings.currency_symbol)
                ));
            }
            ApiEvent::Balance(Err(e)) => self.notify_error(e.to_string()),
            ApiEvent::Transfer {
                result: Ok(record),
                ..
            } => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.session.record_transfer(record);
                }
                self.notify_success("Transfer completed successfully");
            }
            ApiEvent::Transfer {
                pending,
                result: Err(e),
            } => {
                self.notify_error(format!("Transfer to {} failed: {}", pending.to.name, e));
            }
        }
    }
}
