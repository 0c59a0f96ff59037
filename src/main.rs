use std::sync::Arc;

use contactos_core::{
    AppConfig, Contact, ContactLoader, ContactRow, ContactStore, Detail, FileStore, LoadState,
    MemoryStore, PERMISSION_RATIONALE, Route, StaticPermissions, utils,
};

fn main() {
    utils::block_on(run());
}

// Terminal walk-through of the three-screen flow: home, the contact list
// with its load states, then the detail payload for the first contact.
async fn run() {
    let config = AppConfig::load();

    let store: Arc<dyn ContactStore> = match &config.contacts_path {
        Some(path) => Arc::new(FileStore::new(path)),
        None => Arc::new(MemoryStore::new(sample_rows())),
    };
    let permissions = Arc::new(StaticPermissions::new(config.permission_granted));

    let loader = ContactLoader::new(permissions, store);
    let mut states = loader.subscribe();

    enter(&Route::Home);
    enter(&Route::Contacts);
    loader.initialize();

    if loader.state() == LoadState::AwaitingPermission {
        println!("{PERMISSION_RATIONALE}");
        loader.request_permission().await;
        if loader.state() == LoadState::AwaitingPermission {
            println!("Permiso denegado.");
            return;
        }
    }

    if loader.state() == LoadState::Loading {
        println!("Cargando contactos...");
    }
    while loader.state() == LoadState::Loading {
        if states.changed().await.is_err() {
            return;
        }
    }

    match loader.state() {
        LoadState::Loaded(contacts) => {
            render_list(&contacts);
            if let Some(first) = contacts.first() {
                let detail = Detail::from(first);
                enter(&Route::Detail(detail.clone()));
                match serde_json::to_string(&detail) {
                    Ok(payload) => println!("payload: {payload}"),
                    Err(e) => eprintln!("no se pudo serializar el detalle: {e}"),
                }
            }
        }
        LoadState::Error(message) => eprintln!("{message}"),
        _ => {}
    }
}

fn enter(route: &Route) {
    match route {
        Route::Home => println!("== Inicio =="),
        Route::Contacts => println!("== Mis Contactos =="),
        Route::Detail(detail) => println!("== Detalle: {} ==", detail.name),
    }
}

fn render_list(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No se encontraron contactos");
        return;
    }
    for contact in contacts {
        match &contact.phone_number {
            Some(phone) => println!("  {} ({phone})", contact.name),
            None => println!("  {}", contact.name),
        }
    }
}

// Stand-in directory rows for runs without a configured contacts file; the
// duplicate id and the nameless row show the collate rules on screen.
fn sample_rows() -> Vec<ContactRow> {
    vec![
        ContactRow::new("1", Some("Bea"), Some("555-0101")),
        ContactRow::new("1", Some("Bea"), Some("555-0102")),
        ContactRow::new("2", Some("Al"), Some("555-0999")),
        ContactRow::new("3", None, Some("555-0404")),
    ]
}
