fn main() {
    // ESP-IDF link arguments only apply when cross-compiling for the chip;
    // host builds (tests, clippy) must not inherit them.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
}
