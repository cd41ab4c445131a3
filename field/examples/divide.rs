use polyntt_field::bn254::Bn254Field;
use polyntt_field::types::Field;
use polyntt_field::{Capacity, Domain, Polynomial};

fn main() -> polyntt_field::Result<()> {
    let domain = Domain::<Bn254Field>::generate(Capacity::from_log(5)?)?;

    let coefficients: Vec<Bn254Field> = (1..=16).map(Bn254Field::from_canonical_u64).collect();
    let p = Polynomial::new(coefficients)?;
    let evals = p.ntt(&domain)?;
    println!("evaluations: {:?}", evals.evals());

    let divisor = Polynomial::vanishing_polynomial(Capacity::from_log(1)?, Bn254Field::TWO)?;
    let (quotient, remainder) = p.divide(&divisor, &domain)?;
    println!("quotient: {:?}", quotient.coefficients());
    println!("remainder: {:?}", remainder.coefficients());
    Ok(())
}
