// src/noyau/format.rs
//
// Affichage des flottants (forme “repr” la plus courte qui relit la même valeur).
//
// Règles :
// - exposant décimal dans [-4, 16) => notation fixe, toujours avec une partie
//   fractionnaire ("2.0", "0.0001", "1234567890123456.0")
// - sinon => scientifique "d[.ddd]e±XX" (au moins deux chiffres d’exposant)
// - "inf", "-inf", "nan", "-0.0"

/// Bornes de la notation fixe (exposant décimal).
const EXPOSANT_FIXE_MIN: i32 = -4;
const EXPOSANT_FIXE_MAX: i32 = 16;

pub fn format_flottant(x: f64) -> String {
    if x.is_nan() {
        return "nan".into();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if x == 0.0 {
        return if x.is_sign_negative() {
            "-0.0".into()
        } else {
            "0.0".into()
        };
    }

    // `{:e}` donne déjà les chiffres les plus courts (ex: 1.5e16, 1e-5)
    let sci = format!("{:e}", x.abs());
    let (mantisse, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let chiffres: String = mantisse.chars().filter(|c| c.is_ascii_digit()).collect();

    let corps = if (EXPOSANT_FIXE_MIN..EXPOSANT_FIXE_MAX).contains(&exp) {
        notation_fixe(&chiffres, exp)
    } else {
        notation_scientifique(&chiffres, exp)
    };

    if x < 0.0 {
        format!("-{corps}")
    } else {
        corps
    }
}

fn notation_fixe(chiffres: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{chiffres}");
    }

    let nb_entiers = exp as usize + 1;
    if chiffres.len() <= nb_entiers {
        let zeros = "0".repeat(nb_entiers - chiffres.len());
        format!("{chiffres}{zeros}.0")
    } else {
        let (ent, frac) = chiffres.split_at(nb_entiers);
        format!("{ent}.{frac}")
    }
}

fn notation_scientifique(chiffres: &str, exp: i32) -> String {
    let (tete, reste) = chiffres.split_at(1);
    let signe = if exp < 0 { '-' } else { '+' };
    let abs = exp.unsigned_abs();
    if reste.is_empty() {
        format!("{tete}e{signe}{abs:02}")
    } else {
        format!("{tete}.{reste}e{signe}{abs:02}")
    }
}
