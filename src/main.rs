//! Duet backend entry point: configuration, wiring, and serving.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use duet::adapters::ai::{AnthropicConfig, AnthropicProvider};
use duet::adapters::auth::JwtVerifier;
use duet::adapters::http::{
    account::AccountHandlers, api_router, chat::ChatHandlers,
    compatibility::CompatibilityHandlers, consent::ConsentHandlers, couple::CoupleHandlers,
    feedback::FeedbackHandlers, middleware::AuthState, notifications::NotificationHandlers,
    subscription::SubscriptionHandlers, suggestions::SuggestionHandlers,
    thoughts::ThoughtHandlers, wellbeing::WellbeingHandlers, ApiHandlers,
};
use duet::adapters::postgres::{
    PgAnalysisCache, PgChatRepository, PgConsentRepository, PgCoupleRepository,
    PgFeedbackRepository, PgNotificationRepository, PgProfileRepository,
    PgSubscriptionRepository, PgSuggestionCache, PgThoughtRepository, PgUsageLog,
    PgWellbeingRepository,
};
use duet::adapters::push::{HttpRelaySender, LogSender};
use duet::application::handlers::account::{
    CreateAccountHandler, DeleteAccountHandler, GetAccountHandler, SubmitQuizHandler,
    UpdateAccountHandler,
};
use duet::application::handlers::chat::{GetChatHistoryHandler, SendChatMessageHandler};
use duet::application::handlers::compatibility::GetAnalysisHandler;
use duet::application::handlers::consent::{ListConsentsHandler, RecordConsentHandler};
use duet::application::handlers::couple::{
    AcceptInviteHandler, CreateInviteHandler, GetCoupleHandler, UnlinkPartnerHandler,
    UpdateSharedPreferencesHandler,
};
use duet::application::handlers::feedback::{
    GetPreferenceSummaryHandler, RecordFeedbackHandler,
};
use duet::application::handlers::notification::{
    GetPreferencesHandler, RegisterDeviceHandler, UpdatePreferencesHandler,
};
use duet::application::handlers::subscription::{
    AccessGate, ApplyBillingEventHandler, CheckAccessHandler, StartTrialHandler,
};
use duet::application::handlers::suggestion::GenerateSuggestionsHandler;
use duet::application::handlers::thought::{
    ListThoughtsHandler, MarkThoughtReadHandler, SendThoughtHandler,
};
use duet::application::handlers::wellbeing::{ListCheckinsHandler, RecordCheckinHandler};
use duet::config::AppConfig;
use duet::domain::subscription::WebhookVerifier;
use duet::ports::{AiProvider, PushSender, TokenVerifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Repositories
    let profiles = Arc::new(PgProfileRepository::new(pool.clone()));
    let couples = Arc::new(PgCoupleRepository::new(pool.clone()));
    let feedback = Arc::new(PgFeedbackRepository::new(pool.clone()));
    let consents = Arc::new(PgConsentRepository::new(pool.clone()));
    let notifications = Arc::new(PgNotificationRepository::new(pool.clone()));
    let subscriptions = Arc::new(PgSubscriptionRepository::new(pool.clone()));
    let suggestion_cache = Arc::new(PgSuggestionCache::new(pool.clone()));
    let analysis_cache = Arc::new(PgAnalysisCache::new(pool.clone()));
    let thoughts = Arc::new(PgThoughtRepository::new(pool.clone()));
    let chat = Arc::new(PgChatRepository::new(pool.clone()));
    let wellbeing = Arc::new(PgWellbeingRepository::new(pool.clone()));
    let usage = Arc::new(PgUsageLog::new(pool.clone()));

    // External services
    let ai: Arc<dyn AiProvider> = Arc::new(AnthropicProvider::new(
        AnthropicConfig::new(config.ai.anthropic_api_key.expose_secret().clone())
            .with_model(config.ai.model.clone())
            .with_timeout(Duration::from_secs(config.ai.timeout_secs)),
    ));
    let push: Arc<dyn PushSender> = match (&config.push.relay_endpoint, &config.push.relay_api_key)
    {
        (Some(endpoint), Some(key)) => {
            Arc::new(HttpRelaySender::new(endpoint.clone(), key.clone()))
        }
        _ => Arc::new(LogSender),
    };
    let verifier: Arc<dyn TokenVerifier> =
        Arc::new(JwtVerifier::new(&config.auth.jwt_secret, &config.auth.audience));
    let webhook_verifier = Arc::new(WebhookVerifier::new(
        config.payment.webhook_secret.expose_secret().clone(),
    ));

    // Application handlers
    let gate = Arc::new(AccessGate::new(
        profiles.clone(),
        couples.clone(),
        subscriptions.clone(),
    ));

    let handlers = ApiHandlers {
        account: AccountHandlers {
            create: Arc::new(CreateAccountHandler::new(profiles.clone())),
            get: Arc::new(GetAccountHandler::new(profiles.clone())),
            update: Arc::new(UpdateAccountHandler::new(profiles.clone())),
            delete: Arc::new(DeleteAccountHandler::new(
                profiles.clone(),
                couples.clone(),
                feedback.clone(),
                consents.clone(),
                notifications.clone(),
                thoughts.clone(),
                chat.clone(),
                wellbeing.clone(),
                subscriptions.clone(),
            )),
            submit_quiz: Arc::new(SubmitQuizHandler::new(profiles.clone())),
        },
        couple: CoupleHandlers {
            create_invite: Arc::new(CreateInviteHandler::new(
                profiles.clone(),
                couples.clone(),
            )),
            accept_invite: Arc::new(AcceptInviteHandler::new(
                profiles.clone(),
                couples.clone(),
            )),
            get_couple: Arc::new(GetCoupleHandler::new(couples.clone())),
            unlink: Arc::new(UnlinkPartnerHandler::new(profiles.clone(), couples.clone())),
            update_shared: Arc::new(UpdateSharedPreferencesHandler::new(couples.clone())),
        },
        thoughts: ThoughtHandlers {
            send: Arc::new(SendThoughtHandler::new(
                couples.clone(),
                thoughts.clone(),
                notifications.clone(),
                push.clone(),
            )),
            list: Arc::new(ListThoughtsHandler::new(thoughts.clone())),
            mark_read: Arc::new(MarkThoughtReadHandler::new(thoughts.clone())),
        },
        compatibility: CompatibilityHandlers {
            get_analysis: Arc::new(GetAnalysisHandler::new(
                profiles.clone(),
                couples.clone(),
                analysis_cache.clone(),
            )),
        },
        suggestions: SuggestionHandlers {
            generate: Arc::new(GenerateSuggestionsHandler::new(
                profiles.clone(),
                couples.clone(),
                gate.clone(),
                suggestion_cache.clone(),
                ai.clone(),
                usage.clone(),
            )),
        },
        feedback: FeedbackHandlers {
            record: Arc::new(RecordFeedbackHandler::new(feedback.clone())),
            summary: Arc::new(GetPreferenceSummaryHandler::new(
                profiles.clone(),
                feedback.clone(),
            )),
        },
        consent: ConsentHandlers {
            record: Arc::new(RecordConsentHandler::new(consents.clone())),
            list: Arc::new(ListConsentsHandler::new(consents.clone())),
        },
        subscription: SubscriptionHandlers {
            check_access: Arc::new(CheckAccessHandler::new(gate.clone())),
            start_trial: Arc::new(StartTrialHandler::new(profiles.clone())),
            apply_event: Arc::new(ApplyBillingEventHandler::new(subscriptions.clone())),
            verifier: webhook_verifier,
        },
        notifications: NotificationHandlers {
            get_preferences: Arc::new(GetPreferencesHandler::new(notifications.clone())),
            update_preferences: Arc::new(UpdatePreferencesHandler::new(notifications.clone())),
            register_device: Arc::new(RegisterDeviceHandler::new(notifications.clone())),
        },
        chat: ChatHandlers {
            send: Arc::new(SendChatMessageHandler::new(
                profiles.clone(),
                couples.clone(),
                chat.clone(),
                ai.clone(),
                usage.clone(),
            )),
            history: Arc::new(GetChatHistoryHandler::new(chat.clone())),
        },
        wellbeing: WellbeingHandlers {
            record: Arc::new(RecordCheckinHandler::new(wellbeing.clone())),
            list: Arc::new(ListCheckinsHandler::new(wellbeing.clone())),
        },
    };

    let auth_state: AuthState = verifier;
    let router = api_router(handlers, auth_state);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "duet listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
