// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::ErreurCalc;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Entier(BigInt),
    Flottant(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Opérateurs préfixes : produits par to_rpn (moins / plus unaire), jamais par tokenize.
    Neg,
    Pos,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12, 0, 000) ; zéros de tête refusés ailleurs (ex: 007)
/// - flottants (ex: 1.5, .5, 5., 1e-05, 2.5E+3)
/// - séparateur `_` entre deux chiffres (ex: 1_000, 1_000.000_1)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Tout le reste (lettres, ^, %, ...) est refusé : aucune exécution possible.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (tok, fin) = lire_nombre(&chars, i)?;
            out.push(tok);
            i = fin;
            continue;
        }

        return Err(ErreurCalc::CaractereInattendu(c));
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `debut`. Retourne le jeton + l’index de fin.
fn lire_nombre(chars: &[char], debut: usize) -> Result<(Tok, usize), ErreurCalc> {
    let mut i = debut;
    let mut flottant = false;

    // chiffres, et `_` seulement entre deux chiffres
    let avance_chiffres = |mut j: usize| {
        while j < chars.len() {
            let separateur = chars[j] == '_'
                && j > debut
                && chars[j - 1].is_ascii_digit()
                && chars.get(j + 1).is_some_and(|c| c.is_ascii_digit());
            if !chars[j].is_ascii_digit() && !separateur {
                break;
            }
            j += 1;
        }
        j
    };

    i = avance_chiffres(i);
    let nb_entiers = i - debut;

    // partie fractionnaire
    if i < chars.len() && chars[i] == '.' {
        flottant = true;
        let apres_point = i + 1;
        i = avance_chiffres(apres_point);
        if nb_entiers == 0 && i == apres_point {
            return Err(ErreurCalc::NombreInvalide(".".into()));
        }
    }

    // exposant : e / E, signe optionnel, au moins un chiffre
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        flottant = true;
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        let fin = avance_chiffres(j);
        if fin == j {
            let brut: String = chars[debut..fin].iter().collect();
            return Err(ErreurCalc::NombreInvalide(brut));
        }
        i = fin;
    }

    let brut: String = chars[debut..i].iter().collect();
    let propre: String = brut.chars().filter(|&c| c != '_').collect();

    if flottant {
        let x = propre
            .parse::<f64>()
            .map_err(|_| ErreurCalc::NombreInvalide(brut.clone()))?;
        return Ok((Tok::Flottant(x), i));
    }

    // "007" et "0_7" refusés (mais "0", "000" et "0_0" acceptés)
    if propre.len() > 1 && propre.starts_with('0') && propre.chars().any(|c| c != '0') {
        return Err(ErreurCalc::NombreInvalide(brut));
    }
    let n = BigInt::parse_bytes(propre.as_bytes(), 10)
        .ok_or_else(|| ErreurCalc::NombreInvalide(brut.clone()))?;
    Ok((Tok::Entier(n), i))
}

/// Retire les séparateurs `_` d’un texte numérique.
/// `None` si un `_` n’est pas placé entre deux chiffres.
pub fn sans_separateurs(s: &str) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let avant = i > 0 && chars[i - 1].is_ascii_digit();
            let apres = chars.get(i + 1).is_some_and(|c| c.is_ascii_digit());
            if !(avant && apres) {
                return None;
            }
        }
    }
    Some(chars.into_iter().filter(|&c| c != '_').collect())
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Entier(n) => n.to_string(),
            Tok::Flottant(x) => format!("{x:?}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
