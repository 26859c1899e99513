fn main() {
    // Startup configuration is baked in from the environment at build time.
    println!("cargo:rerun-if-env-changed=TRIGGERFREQ_CONFIG");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
