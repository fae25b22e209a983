//! Pick a storage backend per deployment environment.
//!
//! ```text
//! APP_ENV=prod cargo run --example env_mgmt
//! __conditional_method_debug__=1 cargo run --example env_mgmt
//! ```

use conditional_method::prelude::*;
use conditional_method::{cfg_attr_on, init_debug_logging};

#[callable(name = "storage_url", owner = Settings)]
fn storage_url_dev() -> String {
    "sqlite://dev.db".to_string()
}

#[callable(name = "storage_url", owner = Settings)]
fn storage_url_prod() -> String {
    "postgres://db.internal/app".to_string()
}

#[callable(name = "describe", owner = Settings)]
fn describe_staging() -> String {
    "staging".to_string()
}

fn app_env() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_debug_logging();

    let resolver = Resolver::new(Registry::new(), Config::from_env());
    let is_env = |wanted: &'static str| {
        Condition::when(move |_: &Func<(), String>| app_env() == wanted)
    };

    resolver.resolve(storage_url_dev_callable(), &is_env("dev"))?;
    let storage_url = resolver.resolve(storage_url_prod_callable(), &is_env("prod"))?;

    let logged = cfg_attr_on(
        storage_url.clone().into_callable()?,
        Some(Condition::literal(std::env::var_os("VERBOSE"))),
        vec![transformation(|f: Func<(), String>| {
            let inner = f.clone();
            Func::wraps(&f, move |()| {
                let url = inner.call(());
                println!("storage_url() -> {url}");
                url
            })
        })],
    )?;
    println!("using {}", logged.call(()));

    let describe = resolver.resolve(describe_staging_callable(), &is_env("staging"))?;
    match describe.call(()) {
        Ok(name) => println!("environment: {name}"),
        Err(err) => println!("describe unavailable: {err}"),
    }
    Ok(())
}
