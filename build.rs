//! Forwards `CLARA_*` variables from an optional `.env` file into compile-time
//! env so the WASM client can read them with `option_env!`.

const KEYS: &[&str] = &[
    "CLARA_API_URL",
    "CLARA_API_TIMEOUT_MS",
    "CLARA_DISCORD_CLIENT_ID",
    "CLARA_DISCORD_REDIRECT_URI",
    "CLARA_GOOGLE_CLIENT_ID",
    "CLARA_BOT_INVITE_URL",
];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let Ok(iter) = dotenvy::dotenv_iter() else {
        return;
    };

    for (key, value) in iter.flatten() {
        // Real environment wins over the file
        if KEYS.contains(&key.as_str()) && std::env::var(&key).is_err() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
