//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire `todo_core` with the system clock and random identifiers.
//! - Walk one register -> login -> list -> todo -> status flow and print it.
//!
//! Usage: `todo_cli [NAME] [DESCRIPTION]`

use std::process::ExitCode;
use std::sync::Arc;
use todo_core::{
    core_version, AccountService, CoreConfig, IdGenerator, InMemoryIdentityRepository,
    InMemoryTodoRepository, RandomIdGenerator, ServiceError, SystemClock, TodoService,
    TodoStatus, TodoView,
};

const DEFAULT_NAME: &str = "demo user";
const DEFAULT_DESCRIPTION: &str = "buy milk";

fn main() -> ExitCode {
    if let Err(err) = CoreConfig::from_env().and_then(|config| config.init_logging()) {
        eprintln!("todo_cli: logging disabled: {err}");
    }

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| DEFAULT_NAME.to_string());
    let description = args
        .next()
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    println!("todo_core version={}", core_version());
    match run(&name, &description) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!(
                "event=cli_run module=cli status=error error_code={}",
                err.code()
            );
            eprintln!("todo_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(name: &str, description: &str) -> Result<(), ServiceError> {
    let ids: Arc<dyn IdGenerator> = Arc::new(RandomIdGenerator);
    let identity = Arc::new(InMemoryIdentityRepository::new(Arc::clone(&ids)));
    let todos = Arc::new(InMemoryTodoRepository::new(ids, Arc::new(SystemClock)));

    let accounts = AccountService::new(Arc::clone(&identity));
    let service = TodoService::new(identity, todos);

    let user = accounts.register(name)?;
    println!("registered user_id={} name={}", user.id, user.name);

    let access_token = accounts.login(user.id.as_str())?;
    let token = access_token.token.as_str();
    println!("logged in");

    let list = service.create_list(token)?;
    println!("created list_id={}", list.id);

    let created = service.create_todo(token, list.id.as_str(), description)?;
    print_todo("created", &created);

    let started = service.update_todo_status(
        token,
        created.item.id.as_str(),
        TodoStatus::Ongoing.as_str(),
    )?;
    print_todo("updated", &started);

    let view = service.get_list(token, list.id.as_str())?;
    println!("list {} has {} todo(s)", view.list_id, view.todos.len());
    for todo in &view.todos {
        print_todo("  -", todo);
    }
    Ok(())
}

fn print_todo(label: &str, todo: &TodoView) {
    println!(
        "{label} todo_id={} status={} created_by={} updated_at={} description={}",
        todo.item.id, todo.item.status, todo.created_by, todo.item.updated_at, todo.item.description
    );
}
