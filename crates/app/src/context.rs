//! The dashboard's state object.
//!
//! `DashboardContext` owns the inventory store, the forecast service and the
//! identity backend, and gates inventory access on a signed-in session. Every
//! successful action comes back with the notice the UI shows for it.

use std::sync::Arc;

use chrono::Utc;

use stockwise_auth::{AuthError, AuthProvider, Credentials, ProfileUpdate, Session, User};
use stockwise_core::{AlertId, CancelToken, ComponentId, PurchaseOrderId, SupplierId};
use stockwise_events::Subscription;
use stockwise_forecast::{ForecastPoint, ForecastService, ForecastSummary};
use stockwise_inventory::{
    ComponentUpdate, InventoryEvent, InventorySnapshot, InventoryStore, NewComponent, NewPurchaseOrder,
    NewRiskAlert, NewSupplier, Settings, SettingsUpdate,
};

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult, Notice};

/// A successful action: its value plus the notice to show, if any.
///
/// Silent no-ops (unknown ids, already resolved alerts) carry no notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub value: T,
    pub notice: Option<Notice>,
}

impl<T> Reply<T> {
    fn with(value: T, notice: Notice) -> Self {
        Self {
            value,
            notice: Some(notice),
        }
    }

    fn silent(value: T) -> Self {
        Self { value, notice: None }
    }
}

/// Forecast points together with what the forecasting page derives from them.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub points: Vec<ForecastPoint>,
    pub summary: Option<ForecastSummary>,
}

pub struct DashboardContext {
    store: InventoryStore,
    forecasts: ForecastService,
    auth: Arc<dyn AuthProvider>,
    session: Option<Session>,
}

impl DashboardContext {
    pub fn new(snapshot: InventorySnapshot, forecasts: ForecastService, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            store: InventoryStore::new(snapshot),
            forecasts,
            auth,
            session: None,
        }
    }

    /// Seeded demo inventory with services built from `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            InventorySnapshot::seeded(Utc::now()),
            ForecastService::new().with_latency(config.forecast_latency),
            config.auth_provider(),
        )
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Inventory change notifications. Available without a session.
    pub fn subscribe(&self) -> Subscription<InventoryEvent> {
        self.store.subscribe()
    }

    fn require_session(&self) -> AppResult<&Session> {
        self.session.as_ref().ok_or(AppError::Unauthenticated)
    }

    // ---- identity ----

    /// Sign in, racing the backend against `cancel`.
    pub async fn login(&mut self, credentials: Credentials, cancel: &CancelToken) -> AppResult<Reply<Session>> {
        let auth = Arc::clone(&self.auth);
        let email = credentials.email.clone();

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AuthError::Cancelled),
            result = auth.sign_in(credentials) => result,
        };

        match outcome {
            Ok(session) => {
                self.session = Some(session.clone());
                Ok(Reply::with(
                    session,
                    Notice::success("Welcome!", "Successfully logged in to Inventory Management System"),
                ))
            }
            Err(err) => {
                tracing::warn!(%email, error = %err, "sign-in failed");
                Err(err.into())
            }
        }
    }

    /// Pick up a session the backend already holds.
    pub async fn restore_session(&mut self) -> AppResult<Option<&Session>> {
        self.session = self.auth.current_session().await?;
        Ok(self.session.as_ref())
    }

    pub async fn logout(&mut self) -> AppResult<()> {
        self.auth.sign_out().await?;
        self.session = None;
        Ok(())
    }

    pub async fn update_profile(&mut self, update: ProfileUpdate) -> AppResult<Reply<User>> {
        self.require_session()?;
        let user = self.auth.update_profile(update).await?;
        if let Some(session) = self.session.as_mut() {
            session.user = user.clone();
        }
        Ok(Reply::with(user, Notice::success("Profile Updated", "Your profile has been saved")))
    }

    // ---- inventory ----

    /// The current snapshot for rendering.
    pub fn inventory(&self) -> AppResult<Arc<InventorySnapshot>> {
        self.require_session()?;
        Ok(self.store.snapshot())
    }

    pub fn add_component(&mut self, request: NewComponent) -> AppResult<Reply<ComponentId>> {
        self.require_session()?;
        let name = request.name.trim().to_string();
        let change = self.store.add_component(request, Utc::now())?;
        Ok(Reply::with(
            change.outcome,
            Notice::success("Component Added", format!("{name} has been added to your inventory")),
        ))
    }

    pub fn update_component(&mut self, id: ComponentId, update: ComponentUpdate) -> AppResult<Reply<bool>> {
        self.require_session()?;
        let change = self.store.update_component(id, update, Utc::now())?;
        if !change.outcome {
            return Ok(Reply::silent(false));
        }
        let name = change.snapshot.component(id).map(|c| c.name.clone()).unwrap_or_default();
        Ok(Reply::with(
            true,
            Notice::success("Component Updated", format!("{name} has been updated")),
        ))
    }

    /// Set the stock on hand, re-deriving the component's status.
    pub fn update_stock(&mut self, id: ComponentId, stock: u32) -> AppResult<Reply<bool>> {
        self.require_session()?;
        let change = self.store.update_component(id, ComponentUpdate::stock(stock), Utc::now())?;
        if !change.outcome {
            return Ok(Reply::silent(false));
        }
        let name = change.snapshot.component(id).map(|c| c.name.clone()).unwrap_or_default();
        Ok(Reply::with(
            true,
            Notice::success("Stock Updated", format!("{name} stock updated to {stock} units")),
        ))
    }

    pub fn add_supplier(&mut self, request: NewSupplier) -> AppResult<Reply<SupplierId>> {
        self.require_session()?;
        let name = request.name.trim().to_string();
        let change = self.store.add_supplier(request, Utc::now())?;
        Ok(Reply::with(
            change.outcome,
            Notice::success("Supplier Added", format!("{name} has been added to your supplier database")),
        ))
    }

    pub fn raise_alert(&mut self, request: NewRiskAlert) -> AppResult<Reply<AlertId>> {
        self.require_session()?;
        let kind = request.alert_type.as_str().to_lowercase();
        let change = self.store.add_risk_alert(request, Utc::now())?;
        Ok(Reply::with(
            change.outcome,
            Notice::success("Alert Generated", format!("New {kind} alert created")),
        ))
    }

    pub fn resolve_alert(&mut self, id: AlertId) -> AppResult<Reply<bool>> {
        self.require_session()?;
        let change = self.store.resolve_alert(id, Utc::now());
        if !change.outcome {
            return Ok(Reply::silent(false));
        }
        let component = change.snapshot.alert(id).map(|a| a.component.clone()).unwrap_or_default();
        Ok(Reply::with(
            true,
            Notice::success("Alert Resolved", format!("Alert for {component} has been marked as resolved")),
        ))
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) -> AppResult<Reply<Settings>> {
        self.require_session()?;
        let change = self.store.update_settings(update, Utc::now())?;
        Ok(Reply::with(
            change.outcome,
            Notice::success("Settings Saved", "All settings have been saved successfully"),
        ))
    }

    pub fn reset_settings(&mut self) -> AppResult<Reply<Settings>> {
        self.require_session()?;
        let change = self.store.reset_settings(Utc::now());
        Ok(Reply::with(
            change.outcome,
            Notice::success("Settings Reset", "All settings have been reset to default values"),
        ))
    }

    pub fn create_purchase_order(&mut self, request: NewPurchaseOrder) -> AppResult<Reply<PurchaseOrderId>> {
        self.require_session()?;
        let change = self.store.create_purchase_order(request, Utc::now())?;
        let description = change
            .snapshot
            .purchase_orders()
            .iter()
            .find(|po| po.id == change.outcome)
            .map(|po| format!("PO {} has been created for {} {}", po.number, po.quantity, po.component))
            .unwrap_or_default();
        Ok(Reply::with(change.outcome, Notice::success("Purchase Order Created", description)))
    }

    // ---- forecasting ----

    /// Forecast one component from the current snapshot.
    ///
    /// An unknown id gives an empty report with no summary.
    pub async fn forecast(&self, id: ComponentId, cancel: &CancelToken) -> AppResult<Reply<ForecastReport>> {
        let snapshot = self.inventory()?;
        let today = Utc::now().date_naive();
        let points = self.forecasts.generate_forecast(&snapshot, id, today, cancel).await?;

        let Some(component) = snapshot.component(id) else {
            return Ok(Reply::silent(ForecastReport {
                points,
                summary: None,
            }));
        };
        let summary = ForecastSummary::from_forecast(component, &points);
        let notice = Notice::success("Forecast Generated", format!("AI forecast generated for {}", component.name));
        Ok(Reply::with(ForecastReport { points, summary }, notice))
    }
}

impl std::fmt::Debug for DashboardContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardContext")
            .field("store", &self.store)
            .field("forecasts", &self.forecasts)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
