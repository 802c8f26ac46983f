//! # Scoped Emitter Example
//!
//! Two plugins share the `"save"` event of a document scope. Each one registers
//! under its own namespace, so unloading a plugin removes exactly its listeners.
//!
//! ## Run
//! ```bash
//! RUST_LOG=nsemitter=trace cargo run --example scoped
//! ```

use std::cell::Cell;
use std::rc::Rc;

use nsemitter::{EmitterConfig, EmitterError, Listener, Removal, ScopeRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Save {
    path: String,
    bytes: usize,
}

fn main() -> Result<(), EmitterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry: ScopeRegistry<Save> =
        ScopeRegistry::with_config(EmitterConfig::default().with_max_listeners(4));
    let docs = registry.get_or_create("documents");

    let saves = Rc::new(Cell::new(0u32));
    let s = saves.clone();
    let status_bar = Listener::new(move |ev: &Save| {
        s.set(s.get() + 1);
        println!("[status] saved {} ({} bytes)", ev.path, ev.bytes);
    });
    let backup = Listener::new(|ev: &Save| println!("[backup] copying {}", ev.path));
    let lint = Listener::new(|ev: &Save| println!("[lint] checking {}", ev.path));
    let format = Listener::new(|ev: &Save| println!("[format] formatting {}", ev.path));

    docs.on("save", status_bar)?
        .on_ns("save", "backup", backup)?
        .on_ns("save", "tooling", lint)?
        .on_ns("save", "tooling", format.clone())?;

    println!("namespaces: {:?}", docs.namespaces("save"));
    docs.emit("save", &Save { path: "notes.md".into(), bytes: 512 });

    println!("\n-- unloading formatter only");
    docs.off_ns("save", "tooling", &format);
    docs.emit("save", &Save { path: "notes.md".into(), bytes: 640 });

    println!("\n-- unloading tooling plugin");
    docs.unregister_all(Removal::Namespace("save", "tooling"));
    docs.emit("save", &Save { path: "todo.md".into(), bytes: 64 });

    println!("\n-- closing documents scope");
    registry.remove("documents");
    docs.emit("save", &Save { path: "ignored.md".into(), bytes: 0 });

    println!();
    println!("Summary:");
    println!(" ├─► status-bar saves: {}", saves.get());
    println!(" └─► live scopes:      {:?}", registry.scopes());
    Ok(())
}
