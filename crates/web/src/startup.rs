use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpResponse, HttpServer};
use std::{io::Error, net::TcpListener};
use tracing_actix_web::TracingLogger;

use auth_core::{session::SessionStore, user::UserStore};

use crate::{
    configuration::Settings,
    routes::{create_ai_session, health_check, index, phantom_auth},
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address).expect(&format!(
            "Failed to bind port {}",
            configuration.application.port
        ));
        let port = listener.local_addr().unwrap().port();

        let server = run(listener).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), Error> {
        self.server.await
    }
}

async fn run(listener: TcpListener) -> Result<Server, anyhow::Error> {
    // Both registries are shared across every worker and request
    let users = web::Data::new(UserStore::new());
    let sessions = web::Data::new(SessionStore::new());

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "HEAD", "POST", "PUT", "OPTIONS"])
            .allowed_headers(vec!["X-Requested-With", "Content-Type", "Authorization"])
            .max_age(3600);
        // A body that does not decode answers 400 with the same plaintext
        // reason on every route
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().body("Invalid request"),
            )
            .into()
        });
        App::new()
            // Logger middleware
            // Sent active-web log to log subscriber
            .wrap(TracingLogger::default())
            .wrap(cors)
            .service(index)
            .service(health_check)
            .service(phantom_auth)
            .service(create_ai_session)
            .app_data(json_config)
            .app_data(users.clone())
            .app_data(sessions.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
