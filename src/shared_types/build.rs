use anyhow::Result;
use crux_core::typegen::TypeGen;
use party_planner_core::{
    view::{Action, Node},
    App, BootstrapStage, GuestEvent, PartyEvent,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<PartyEvent>()?;
    gen.register_type::<GuestEvent>()?;

    // The view tree is recursive; register its enums so every variant is traced
    gen.register_type::<Node>()?;
    gen.register_type::<Action>()?;
    gen.register_type::<BootstrapStage>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
