//! Command line front end for the DocManager API
//!
//! ```text
//! cargo run --features cli --bin docmanager -- login demo secret
//! cargo run --features cli --bin docmanager -- documents --search pan
//! ```

use clap::{Arg, ArgMatches, Command};
use std::process;

use docmanager::config::ClientOptions;
use docmanager::documents::{Document, DocumentType};
use docmanager::error::{Error, Result};
use docmanager::fallback::Loaded;
use docmanager::outcome::MutationOutcome;
use docmanager::pages::{
    login_failure_message, AddDocumentPage, AddPersonPage, DashboardPage, LoginPage, Mount,
    PageContext, PersonDetailPage, ProfilePage, ViewDocumentPage,
};
use docmanager::persons::Person;
use docmanager::session::FileSessionStore;
use docmanager::DocManager;

fn cli() -> Command<'static> {
    Command::new("docmanager")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage persons and their documents")
        .subcommand_required(true)
        .subcommand(
            Command::new("login")
                .about("Sign in and store the session")
                .arg(Arg::new("username").required(true))
                .arg(Arg::new("password").required(true)),
        )
        .subcommand(Command::new("demo-login").about("Sign in with the demo account"))
        .subcommand(Command::new("logout").about("Forget the stored session"))
        .subcommand(Command::new("whoami").about("Show the stored user"))
        .subcommand(
            Command::new("documents")
                .about("List your documents")
                .arg(search_arg()),
        )
        .subcommand(
            Command::new("persons")
                .about("List your persons")
                .arg(search_arg()),
        )
        .subcommand(
            Command::new("person")
                .about("Show a person and their documents")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("document")
                .about("Show a document")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("add-person")
                .about("Create a person")
                .arg(Arg::new("name").long("name").takes_value(true).required(true))
                .arg(Arg::new("phone").long("phone").takes_value(true))
                .arg(Arg::new("address").long("address").takes_value(true)),
        )
        .subcommand(
            Command::new("add-document")
                .about("Attach a document to a person")
                .arg(Arg::new("person").required(true))
                .arg(Arg::new("name").long("name").takes_value(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .takes_value(true)
                        .default_value("OTHER"),
                )
                .arg(Arg::new("file").long("file").takes_value(true))
                .arg(Arg::new("description").long("description").takes_value(true)),
        )
        .subcommand(
            Command::new("delete-document")
                .about("Delete a document")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("profile")
                .about("Update your profile")
                .arg(Arg::new("full-name").long("full-name").takes_value(true))
                .arg(Arg::new("email").long("email").takes_value(true))
                .arg(Arg::new("phone").long("phone").takes_value(true)),
        )
}

fn search_arg() -> Arg<'static> {
    Arg::new("search")
        .short('s')
        .long("search")
        .takes_value(true)
        .help("Case-insensitive filter")
}

fn id_arg() -> Arg<'static> {
    Arg::new("id").required(true)
}

fn parse_id(matches: &ArgMatches, name: &str) -> Result<i64> {
    let raw = matches.value_of(name).unwrap_or_default();
    raw.parse()
        .map_err(|_| Error::validation(format!("Not a valid id: {}", raw)))
}

fn print_document(doc: &Document) {
    println!(
        "{:>4}  {:<24} {:<14} {}",
        doc.id,
        doc.name,
        doc.type_label(),
        doc.description.as_deref().unwrap_or("")
    );
}

fn print_person(person: &Person) {
    println!(
        "{:>4}  {:<24} {:<14} {}",
        person.id,
        person.name,
        person.phone.as_deref().unwrap_or(""),
        person.address.as_deref().unwrap_or("")
    );
}

fn note_source<T>(loaded: &Loaded<T>) {
    if loaded.is_demo() {
        eprintln!("(server unavailable, showing demo data)");
    }
}

fn report<T>(outcome: &MutationOutcome<T>, applied: &str, local: &str) -> Result<()> {
    match outcome {
        MutationOutcome::Rejected(err) => Err(Error::validation(err.message())),
        _ => {
            println!("{}", outcome.notice(applied, local));
            Ok(())
        }
    }
}

fn not_logged_in() -> Error {
    Error::validation("Not logged in. Run `docmanager login` first.")
}

async fn run(matches: ArgMatches, ctx: &PageContext<'_>) -> Result<()> {
    match matches.subcommand() {
        Some(("login", sub)) => {
            let username = sub.value_of("username").unwrap_or_default();
            let password = sub.value_of("password").unwrap_or_default();
            match LoginPage::submit(ctx, username, password).await {
                Ok(user) => println!("Welcome, {}", user.full_name),
                Err(err) => {
                    return Err(Error::validation(format!(
                        "Login failed: {}",
                        login_failure_message(&err)
                    )))
                }
            }
        }
        Some(("demo-login", _)) => {
            let user = LoginPage::demo_login(ctx)?;
            println!("Welcome, {}", user.full_name);
        }
        Some(("logout", _)) => {
            LoginPage::logout(ctx)?;
            println!("Logged out");
        }
        Some(("whoami", _)) => match ctx.guard().user() {
            Some(user) => println!("{} ({}) id={}", user.full_name, user.username, user.id),
            None => return Err(not_logged_in()),
        },
        Some(("documents", sub)) => {
            let Mount::Ready(page) = DashboardPage::mount(ctx).await else {
                return Err(not_logged_in());
            };
            note_source(&page.documents);
            println!("{}", page.document_count_label());
            for doc in page.visible_documents(sub.value_of("search").unwrap_or_default()) {
                print_document(doc);
            }
        }
        Some(("persons", sub)) => {
            let Mount::Ready(page) = DashboardPage::mount(ctx).await else {
                return Err(not_logged_in());
            };
            note_source(&page.persons);
            for person in page.visible_persons(sub.value_of("search").unwrap_or_default()) {
                print_person(person);
            }
        }
        Some(("person", sub)) => {
            let id = parse_id(sub, "id")?;
            let Mount::Ready(page) = PersonDetailPage::mount(ctx, id).await else {
                return Err(not_logged_in());
            };
            print_person(&page.person);
            println!("Documents ({})", page.documents.len());
            for doc in &page.documents {
                print_document(doc);
            }
        }
        Some(("document", sub)) => {
            let id = parse_id(sub, "id")?;
            let Mount::Ready(page) = ViewDocumentPage::mount(ctx, id).await else {
                return Err(not_logged_in());
            };
            note_source(&page.document);
            print_document(&page.document.data);
            println!("File: {}", page.document.data.file_path);
        }
        Some(("add-person", sub)) => {
            let Mount::Ready(mut page) = AddPersonPage::mount(ctx) else {
                return Err(not_logged_in());
            };
            page.name = sub.value_of("name").unwrap_or_default().to_string();
            page.phone = sub.value_of("phone").unwrap_or_default().to_string();
            page.address = sub.value_of("address").unwrap_or_default().to_string();
            let outcome = page.submit(ctx).await;
            report(&outcome, "Person added!", "Saved locally. Backend not available.")?;
        }
        Some(("add-document", sub)) => {
            let person_id = parse_id(sub, "person")?;
            let Mount::Ready(mut page) = AddDocumentPage::mount(ctx, person_id) else {
                return Err(not_logged_in());
            };
            page.name = sub.value_of("name").unwrap_or_default().to_string();
            page.doc_type = sub
                .value_of("type")
                .unwrap_or_default()
                .parse::<DocumentType>()?;
            page.description = sub.value_of("description").unwrap_or_default().to_string();
            if let Some(file) = sub.value_of("file") {
                page.select_file(file);
            }
            let outcome = page.submit(ctx).await;
            report(&outcome, "Document saved!", "Saved locally. Backend not available.")?;
        }
        Some(("delete-document", sub)) => {
            let id = parse_id(sub, "id")?;
            if ctx.guard().user().is_none() {
                return Err(not_logged_in());
            }
            let result = ctx.api.documents().delete(id).await;
            let outcome = MutationOutcome::optimistic(result, "Deleting document", || ());
            report(&outcome, "Document deleted", "Document deleted locally")?;
        }
        Some(("profile", sub)) => {
            let Mount::Ready(mut page) = ProfilePage::mount(ctx) else {
                return Err(not_logged_in());
            };
            if let Some(full_name) = sub.value_of("full-name") {
                page.full_name = full_name.to_string();
            }
            if let Some(email) = sub.value_of("email") {
                page.email = email.to_string();
            }
            if let Some(phone) = sub.value_of("phone") {
                page.phone = phone.to_string();
            }
            let outcome = page.save(ctx).await;
            report(
                &outcome,
                "Profile updated successfully",
                "Saved locally. Backend not available.",
            )?;
        }
        _ => unreachable!("clap requires a subcommand"),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let matches = cli().get_matches();

    let options = match ClientOptions::from_env() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    };

    let session_dir =
        std::env::var("DOCMANAGER_SESSION_DIR").unwrap_or_else(|_| ".docmanager".to_string());
    let store = FileSessionStore::new(session_dir, &options.session_key);

    let api = match DocManager::new_with_options(options) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    };

    let ctx = PageContext::new(&api, &store);
    if let Err(err) = run(matches, &ctx).await {
        eprintln!("Error: {}", err.message());
        process::exit(1);
    }
}
