use afl::fuzz;
use br_tax_id::{Cnpj, Cpf};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;

    // Parsing must never panic, and whatever the parser accepts must
    // satisfy the predicate in both surface forms.
    if let Ok(cnpj) = Cnpj::parse(input) {
        assert!(Cnpj::is_valid(cnpj.as_str()));
        assert!(Cnpj::is_valid(&cnpj.stripped()));
    }
    if let Ok(cpf) = Cpf::parse(input) {
        assert!(Cpf::is_valid(cpf.as_str()));
        assert!(Cpf::is_valid(&cpf.stripped()));
    }

    // The predicate itself must never panic either.
    let _ = Cnpj::is_valid(input);
    let _ = Cpf::is_valid(input);

    Some(())
}
