#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::web::Data;
    use actix_web::{App, HttpServer};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    use wakawaka::common::ConfigError;
    use wakawaka::config::{ServerConfig, StaticMounts};
    use wakawaka::frontend::{shell, App as WakaApp};

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let conf = get_configuration(None)
        .map_err(|e| std::io::Error::other(ConfigError::Leptos(e.to_string())))?;
    let server = ServerConfig::from_env(conf.leptos_options.site_addr)
        .map_err(std::io::Error::other)?;

    log::info!("WakaWaka listening on http://{}", server.bind_addr);

    HttpServer::new(move || {
        let routes = generate_route_list(WakaApp);
        let leptos_options = &conf.leptos_options;
        let mounts = StaticMounts::new(&leptos_options.site_root, &leptos_options.site_pkg_dir);

        App::new()
            .service(Files::new(&mounts.pkg_prefix, &mounts.pkg_dir))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .service(Files::new("/", &mounts.site_root))
            .app_data(Data::new(leptos_options.to_owned()))
    })
    .bind(server.bind_addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser bundle starts from `hydrate` in lib.rs.
}
