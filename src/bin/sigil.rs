//! Sigil CLI — mint seeds, inspect traits, render artwork
//!
//! Commands:
//!   sigil mint     — bind a seed (random or given) to the next token id
//!   sigil list     — list all minted tokens with their traits
//!   sigil traits   — show the trait record for a token or raw seed
//!   sigil grid     — ASCII preview of the decoded ring matrix
//!   sigil render   — assemble the SVG document and write it to disk
//!   sigil demo     — run a full walkthrough on fresh seeds

use sigil_core::art::{builtin_store, document_sha256, expected_len, render, FragmentSet};
use sigil_core::{Grid, Seed, SeedProvider, TokenStore, TraitSet};
use std::env;

const STORE_FILE: &str = "sigil-store.json";

fn print_usage() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        sigil v0.1 — deterministic seed artwork               ║
║        256-bit seed → traits → byte-exact vector art         ║
╚══════════════════════════════════════════════════════════════╝

Usage: sigil <command> [options]

Commands:
  mint   [seed-hex]              Mint the next token (random seed if omitted)
  list                           List minted tokens and their traits
  traits <token-id | seed-hex>   Print the trait record as JSON
  grid   <token-id | seed-hex>   ASCII preview of the 4x64 ring matrix
  render <token-id | seed-hex> [out.svg]   Assemble and write the document
  demo                           Full walkthrough (mint, traits, render)

Examples:
  sigil mint
  sigil mint 0x00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff
  sigil traits 1
  sigil render 1 token1.svg
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "mint" => cmd_mint(&args[2..]),
        "list" => cmd_list(),
        "traits" => cmd_traits(&args[2..]),
        "grid" => cmd_grid(&args[2..]),
        "render" => cmd_render(&args[2..]),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }
}

fn load_store() -> TokenStore {
    TokenStore::open(STORE_FILE, "local")
}

fn save_store(store: &TokenStore) {
    if let Err(e) = store.save() {
        eprintln!("  Failed to save: {}", e);
    } else {
        println!("  Saved to {}", STORE_FILE);
    }
}

/// Resolve an argument that is either a minted token id or a raw seed hex.
fn resolve_seed(store: &TokenStore, arg: &str) -> Option<Seed> {
    if let Ok(token_id) = arg.parse::<u64>() {
        let seed = store.seed_of(token_id);
        if seed.is_none() {
            eprintln!("  Token #{} is not minted", token_id);
        }
        return seed;
    }
    match Seed::from_hex(arg) {
        Ok(seed) => Some(seed),
        Err(e) => {
            eprintln!("  Not a token id or seed: {}", e);
            None
        }
    }
}

fn random_seed() -> Seed {
    Seed::from_bytes(rand::random::<[u8; 32]>())
}

fn cmd_mint(args: &[String]) {
    let seed = match args.first() {
        Some(hex) => match Seed::from_hex(hex) {
            Ok(seed) => seed,
            Err(e) => {
                eprintln!("  Invalid seed: {}", e);
                return;
            }
        },
        None => random_seed(),
    };

    let mut store = load_store();
    let token_id = store.next_token_id();
    match store.mint(token_id, seed) {
        Ok(()) => {
            let traits = TraitSet::derive(&seed);
            println!("\n  Minted token #{}", token_id);
            println!("  Seed:   {}", seed);
            println!("  Traits: {}", traits.summary());
            save_store(&store);
        }
        Err(e) => eprintln!("  Mint failed: {}", e),
    }
}

fn cmd_list() {
    let store = load_store();
    if store.count() == 0 {
        println!("\n  No tokens. Use 'sigil mint' or 'sigil demo' to get started.");
        return;
    }
    println!("\n  Tokens ({}):", store.count());
    println!("  {}", "-".repeat(80));
    for (id, token) in &store.tokens {
        let traits = TraitSet::derive(&token.seed);
        println!("  #{:<4} {} | {}", id, &token.seed.to_hex()[..16], traits.summary());
    }
    println!("  {}", store.summary());
}

fn cmd_traits(args: &[String]) {
    let Some(arg) = args.first() else {
        eprintln!("Usage: sigil traits <token-id | seed-hex>");
        return;
    };
    let store = load_store();
    let Some(seed) = resolve_seed(&store, arg) else {
        return;
    };

    let traits = TraitSet::derive(&seed);
    // The metadata envelope itself belongs to the caller; this is the record
    // it wraps, in the exact encodings the core guarantees.
    let record = serde_json::json!({
        "evenness": traits.evenness.label(),
        "passages": traits.passages,
        "crown": traits.crown.to_string(),
    });
    println!("{}", serde_json::to_string_pretty(&record).unwrap());
}

fn cmd_grid(args: &[String]) {
    let Some(arg) = args.first() else {
        eprintln!("Usage: sigil grid <token-id | seed-hex>");
        return;
    };
    let store = load_store();
    let Some(seed) = resolve_seed(&store, arg) else {
        return;
    };

    let grid = Grid::decode(&seed);
    println!("\n  Seed: {}", seed);
    println!("  Rings (innermost first, '.' open, '#' blocked):\n");
    for line in grid.preview().lines() {
        println!("  {}", line);
    }
}

fn cmd_render(args: &[String]) {
    let Some(arg) = args.first() else {
        eprintln!("Usage: sigil render <token-id | seed-hex> [out.svg]");
        return;
    };
    let store = load_store();
    let Some(seed) = resolve_seed(&store, arg) else {
        return;
    };
    let out_path = args.get(1).map(|s| s.as_str()).unwrap_or("sigil.svg");

    let fragments = match FragmentSet::resolve(&builtin_store()) {
        Ok(fragments) => fragments,
        Err(e) => {
            eprintln!("  Fragment store misconfigured: {}", e);
            return;
        }
    };

    let doc = render(&seed, &fragments);
    if let Err(e) = std::fs::write(out_path, &doc) {
        eprintln!("  Failed to write {}: {}", out_path, e);
        return;
    }
    println!("\n  Rendered {} -> {}", seed, out_path);
    println!("  Length:   {} bytes (precomputed {})", doc.len(), expected_len(&fragments));
    println!("  SHA-256:  {}", document_sha256(&doc));
}

fn cmd_demo() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║              sigil v0.1 — Full Demo                          ║
║         Mint → Decode → Traits → Render → Verify             ║
╚══════════════════════════════════════════════════════════════╝
"#
    );

    // Step 1: mint three seeds
    println!("Step 1: Minting tokens...");
    println!("{}", "-".repeat(60));
    let mut store = load_store();
    let mut minted = Vec::new();
    for _ in 0..3 {
        let token_id = store.next_token_id();
        let seed = random_seed();
        if store.mint(token_id, seed).is_ok() {
            println!("  Token #{}: {}", token_id, seed);
            minted.push(token_id);
        }
    }

    // Step 2: traits
    println!("\nStep 2: Deriving traits...");
    println!("{}", "-".repeat(60));
    for &id in &minted {
        if let Some(seed) = store.seed_of(id) {
            println!("  #{} | {}", id, TraitSet::derive(&seed).summary());
        }
    }

    // Step 3: grid preview of the first mint
    println!("\nStep 3: Ring matrix of token #{}...", minted[0]);
    println!("{}", "-".repeat(60));
    if let Some(seed) = store.seed_of(minted[0]) {
        for line in Grid::decode(&seed).preview().lines() {
            println!("  {}", line);
        }
    }

    // Step 4: render and verify determinism
    println!("\nStep 4: Rendering token #{}...", minted[0]);
    println!("{}", "-".repeat(60));
    let fragments = FragmentSet::builtin();
    if let Some(seed) = store.seed_of(minted[0]) {
        let doc = render(&seed, &fragments);
        let again = render(&seed, &fragments);
        println!("  Length:      {} bytes", doc.len());
        println!("  SHA-256:     {}", document_sha256(&doc));
        println!("  Det. check:  {}", if doc == again { "identical re-render" } else { "MISMATCH" });
        let filename = format!("sigil-{}.svg", minted[0]);
        match std::fs::write(&filename, &doc) {
            Ok(()) => println!("  Written:     {}", filename),
            Err(e) => eprintln!("  Write failed: {}", e),
        }
    }

    // Step 5: persist
    println!("\nStep 5: Saving store...");
    println!("{}", "-".repeat(60));
    save_store(&store);
    println!("  {}", store.summary());

    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║              sigil demo complete                             ║
║                                                              ║
║  - Minted 3 seeds and derived their trait records            ║
║  - Rendered a byte-exact SVG document with SHA-256 pin       ║
║  - Same seed, same bytes: re-render verified identical       ║
║                                                              ║
║  Run 'sigil traits <id>' for the JSON trait record.          ║
║  Run 'sigil render <id> out.svg' to export artwork.          ║
╚══════════════════════════════════════════════════════════════╝
"#
    );
}
