// src/noyau/valeur.rs
//
// Valeur numérique du noyau.
// - Entier : exact (grand entier), reste entier pour + - *
// - Flottant : f64 (IEEE : un débordement donne inf, pas une erreur)
//
// La division "/" produit toujours un flottant.
// Entier / entier : quotient exact arrondi une seule fois (au plus proche, pair),
// quelle que soit la taille des opérandes ; seul un quotient hors f64 => Debordement.
// Un entier mélangé à un flottant est converti ; s’il ne tient pas dans un f64 => Debordement.

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurCalc;
use super::format::format_flottant;

#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Entier(BigInt),
    Flottant(f64),
}

impl Valeur {
    /// Conversion vers f64 (échoue si l’entier est trop grand).
    pub fn en_f64(&self) -> Result<f64, ErreurCalc> {
        match self {
            Valeur::Entier(n) => n
                .to_f64()
                .filter(|x| x.is_finite())
                .ok_or(ErreurCalc::Debordement),
            Valeur::Flottant(x) => Ok(*x),
        }
    }

    pub fn oppose(self) -> Valeur {
        match self {
            Valeur::Entier(n) => Valeur::Entier(-n),
            Valeur::Flottant(x) => Valeur::Flottant(-x),
        }
    }

    pub fn additionner(self, autre: Valeur) -> Result<Valeur, ErreurCalc> {
        match (self, autre) {
            (Valeur::Entier(a), Valeur::Entier(b)) => Ok(Valeur::Entier(a + b)),
            (a, b) => Ok(Valeur::Flottant(a.en_f64()? + b.en_f64()?)),
        }
    }

    pub fn soustraire(self, autre: Valeur) -> Result<Valeur, ErreurCalc> {
        match (self, autre) {
            (Valeur::Entier(a), Valeur::Entier(b)) => Ok(Valeur::Entier(a - b)),
            (a, b) => Ok(Valeur::Flottant(a.en_f64()? - b.en_f64()?)),
        }
    }

    pub fn multiplier(self, autre: Valeur) -> Result<Valeur, ErreurCalc> {
        match (self, autre) {
            (Valeur::Entier(a), Valeur::Entier(b)) => Ok(Valeur::Entier(a * b)),
            (a, b) => Ok(Valeur::Flottant(a.en_f64()? * b.en_f64()?)),
        }
    }

    /// Division réelle. Diviseur nul (entier ou flottant, y compris -0.0) => erreur.
    pub fn diviser(self, autre: Valeur) -> Result<Valeur, ErreurCalc> {
        if autre.est_zero() {
            return Err(ErreurCalc::DivisionParZero);
        }
        match (self, autre) {
            (Valeur::Entier(a), Valeur::Entier(b)) => {
                Ok(Valeur::Flottant(diviser_entiers(&a, &b)?))
            }
            (a, b) => Ok(Valeur::Flottant(a.en_f64()? / b.en_f64()?)),
        }
    }

    fn est_zero(&self) -> bool {
        match self {
            Valeur::Entier(n) => n.is_zero(),
            Valeur::Flottant(x) => *x == 0.0,
        }
    }
}

/// Bits du quotient entier intermédiaire : 53 (mantisse) + garde + marge.
const BITS_QUOTIENT: i64 = 55;

/// a / b (b non nul) arrondi une seule fois vers le f64 le plus proche (égalité => pair).
///
/// Le numérateur (ou le diviseur) est décalé pour que le quotient entier ait
/// au moins `BITS_QUOTIENT` bits ; le reste sert de bit collant.
/// Résultat sous-normal : arrondi directement à la précision disponible.
fn diviser_entiers(a: &BigInt, b: &BigInt) -> Result<f64, ErreurCalc> {
    let negatif = (a.sign() == Sign::Minus) != (b.sign() == Sign::Minus);
    let signe = |x: f64| if negatif { -x } else { x };

    let (na, nb) = (a.magnitude(), b.magnitude());
    if na.is_zero() {
        return Ok(signe(0.0));
    }

    // valeur = (q + reste/den) * 2^-decalage
    let decalage = BITS_QUOTIENT - (na.bits() as i64 - nb.bits() as i64);
    let (num, den): (BigUint, BigUint) = if decalage >= 0 {
        (na << decalage as usize, nb.clone())
    } else {
        (na.clone(), nb << (-decalage) as usize)
    };
    let q = &num / &den;
    let inexact = !(&num % &den).is_zero();

    let n = q.bits() as i64; // BITS_QUOTIENT ou BITS_QUOTIENT + 1
    let exposant = n - 1 - decalage; // valeur dans [2^exposant, 2^(exposant+1))
    if exposant > 1023 {
        return Err(ErreurCalc::Debordement);
    }

    // bits significatifs disponibles (moins de 53 en zone sous-normale)
    let precision = if exposant >= -1022 {
        53
    } else {
        53 - (-1022 - exposant)
    };
    if precision < 0 {
        return Ok(signe(0.0)); // < 2^-1075 : arrondi à zéro
    }

    let abandon = (n - precision) as u64; // >= 2
    let mut m: BigUint = &q >> abandon;
    let garde = q.bit(abandon - 1);
    let collant = inexact || q.trailing_zeros().is_some_and(|tz| tz < abandon - 1);
    if garde && (collant || m.bit(0)) {
        m += 1u32;
    }

    // m <= 2^53 : conversion exacte
    let m = m.to_u64().ok_or(ErreurCalc::Debordement)? as f64;
    let x = mise_a_l_echelle(m, abandon as i64 - decalage);
    if x.is_infinite() {
        return Err(ErreurCalc::Debordement);
    }
    Ok(signe(x))
}

/// x * 2^k par paliers exacts ; seul le dernier produit peut passer en sous-normal.
fn mise_a_l_echelle(mut x: f64, mut k: i64) -> f64 {
    while k > 1000 {
        x *= puissance_de_deux(1000);
        k -= 1000;
    }
    while k < -1000 {
        x *= puissance_de_deux(-1000);
        k += 1000;
    }
    x * puissance_de_deux(k)
}

/// 2^k pour k dans [-1022, 1023] (f64 normal).
fn puissance_de_deux(k: i64) -> f64 {
    f64::from_bits(((k + 1023) as u64) << 52)
}

impl fmt::Display for Valeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valeur::Entier(n) => write!(f, "{n}"),
            Valeur::Flottant(x) => f.write_str(&format_flottant(*x)),
        }
    }
}

impl From<i64> for Valeur {
    fn from(n: i64) -> Self {
        Valeur::Entier(BigInt::from(n))
    }
}

impl From<f64> for Valeur {
    fn from(x: f64) -> Self {
        Valeur::Flottant(x)
    }
}
