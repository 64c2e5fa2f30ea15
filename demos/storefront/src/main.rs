use vitastore::prelude::*;

// ---------------------------------------------------------------------------
// Walkthrough
// ---------------------------------------------------------------------------

/// Drains pending toasts and prints them in the active locale.
fn show_toasts(app: &App, rx: &mut tokio::sync::mpsc::UnboundedReceiver<Notification>) {
    while let Ok(n) = rx.try_recv() {
        println!("  [{:?}] {}", n.level, app.render(&n));
    }
}

fn show_header(app: &App) {
    let i18n = app.i18n();
    let account = match app.auth().current_user() {
        Some(user) => user.name,
        None => i18n.resolve("nav.login"),
    };
    println!(
        "{} | {} | {} | {}",
        i18n.resolve("nav.home"),
        i18n.resolve("nav.products"),
        i18n.resolve("cart.title"),
        account
    );
}

async fn tour(
    app: &App,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<Notification>,
) -> Result<(), VitastoreError> {
    let picker: Vec<String> = app
        .i18n()
        .available_locales()
        .iter()
        .map(|l| format!("{} ({})", l.name, l.code))
        .collect();
    println!("{}: {}", app.i18n().resolve("language.label"), picker.join(", "));
    println!("session: {}", app.auth().state());
    show_header(app);

    println!("\n> wrong password");
    app.auth().login("usuario@ejemplo.com", "nope").await;
    show_toasts(app, rx);

    println!("\n> demo user");
    app.auth().try_login("usuario@ejemplo.com", "123456").await?;
    show_toasts(app, rx);
    show_header(app);

    println!("\n> switch to English");
    app.i18n().set_locale(Locale::En);
    show_header(app);
    app.auth().logout();
    show_toasts(app, rx);

    println!("\n> register");
    let mut new_user = NewUser::new("Lucía Pérez", "lucia@ejemplo.com");
    new_user.phone = Some("+34 600 000 000".to_string());
    if app.auth().register(new_user).await {
        show_toasts(app, rx);
        show_header(app);
        app.auth().logout();
    }
    show_toasts(app, rx);

    println!("\n> back-office");
    app.auth().login("Admin", "Admin@123").await;
    show_toasts(app, rx);
    if app.auth().is_admin() {
        println!("{}", app.i18n().resolve("admin.contact.title"));
        for user in app.auth().registered_users() {
            println!("  {user}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env();
    let (notifier, mut rx) = ChannelNotifier::channel();
    let app = AppBuilder::from_config(&config)?
        .notifier(notifier)
        .build()
        .await;

    tour(&app, &mut rx).await?;
    Ok(())
}
