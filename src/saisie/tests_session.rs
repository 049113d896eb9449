//! Scénarios de la machine d’état (séquences de touches du pavé).

use crate::noyau::{OperateurUnaire, Operateur, Sentinelle};
use crate::reglages::Reglages;

use super::memoire::{Registre, RegistreSimple, TypeRegistre};
use super::session::Session;

/// Touches compactes :
/// chiffres et `.` ; `+ - * /` ; `=` ; `C` (tout) ; `E` (CE) ; `<` (⌫) ; `~` (±) ; `%`.
fn taper<R: Registre>(s: &mut Session<R>, touches: &str) {
    for c in touches.chars() {
        match c {
            ' ' => {}
            '+' | '-' | '*' | '/' => s.operateur(Operateur::depuis_glyphe(c).unwrap()),
            '=' => s.egal(),
            'C' => s.tout_effacer(),
            'E' => s.effacer_entree(),
            '<' => s.retour_arriere(),
            '~' => s.basculer_signe(),
            '%' => s.pourcentage(),
            _ => s.chiffre(c),
        }
    }
}

fn session(touches: &str) -> Session {
    let mut s = Session::new();
    taper(&mut s, touches);
    s
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn depart() {
    let s = Session::new();
    assert_eq!(s.tampon(), "0");
    assert_eq!(s.texte_affiche(), "0");
    assert_eq!(s.texte_expression(), "");
    assert!(!s.est_verrouille());
    assert!(!s.est_en_erreur());
    assert!(s.historique().is_empty());
    assert!(!s.memoire_active());
}

#[test]
fn chiffres_et_groupes() {
    let s = session("1234567");
    assert_eq!(s.tampon(), "1234567");
    assert_eq!(s.texte_affiche(), "1,234,567");
}

#[test]
fn un_seul_point() {
    let s = session(".5.2");
    assert_eq!(s.tampon(), "0.52");

    let s = session("12.");
    assert_eq!(s.texte_affiche(), "12.");
}

#[test]
fn plafond_de_saisie_passe_en_overflow() {
    let s = session("123456789012345");
    assert!(!s.est_en_erreur());

    let s = session("1234567890123456");
    assert_eq!(s.erreur(), Some(Sentinelle::Depassement));
    assert_eq!(s.texte_affiche(), "Overflow");
}

#[test]
fn plafond_configurable() {
    let reglages = Reglages::depuis_toml("longueur_max = 3").unwrap();
    let mut s = Session::depuis_reglages(&reglages);
    taper(&mut s, "123");
    assert!(!s.est_en_erreur());
    taper(&mut s, "4");
    assert!(s.est_en_erreur());
}

#[test]
fn retour_arriere() {
    assert_eq!(session("123<").tampon(), "12");
    assert_eq!(session("7<").tampon(), "0");
    assert_eq!(session("5~<").tampon(), "0");
    assert_eq!(session("<<<").tampon(), "0");
}

#[test]
fn retour_arriere_deverrouille() {
    let s = session("12 + 34 = <");
    assert!(!s.est_verrouille());
    assert_eq!(s.tampon(), "4");
}

#[test]
fn signe() {
    assert_eq!(session("5~").tampon(), "-5");
    assert_eq!(session("5~~").tampon(), "5");
    assert_eq!(session("~").tampon(), "-0");
    assert_eq!(session("~3").tampon(), "-3");
    assert_eq!(session("5~ + 2 =").tampon(), "-3");
}

#[test]
fn effacer_entree_garde_l_expression() {
    let s = session("2 + 5 E 3 =");
    assert_eq!(s.tampon(), "5");
    assert_eq!(s.texte_expression(), "2 + 3");
}

/* ------------------------ Opérateurs et égal ------------------------ */

#[test]
fn precedence_dans_la_session() {
    let s = session("2 + 3 * 4 =");
    assert_eq!(s.tampon(), "14");
    assert_eq!(s.texte_expression(), "2 + 3 × 4");
    assert!(s.est_verrouille());
}

#[test]
fn expression_en_cours() {
    let s = session("12 + 3 *");
    assert_eq!(s.texte_expression(), "12 + 3 ×");
    assert_eq!(s.tampon(), "0");
}

#[test]
fn egal_repete_arithmetique() {
    let mut s = session("2 + 3 =");
    assert_eq!(s.tampon(), "5");
    s.egal();
    assert_eq!(s.tampon(), "8");
    s.egal();
    assert_eq!(s.tampon(), "11");

    let h = s.historique();
    assert_eq!(h.len(), 3);
    assert_eq!(h[0].expression, "8 + 3");
    assert_eq!(h[0].resultat, 11.0);
    assert_eq!(h[2].expression, "2 + 3");
}

#[test]
fn egal_repete_multiplication() {
    let s = session("3 * 2 ===");
    assert_eq!(s.tampon(), "24");
}

#[test]
fn egal_sur_tampon_seul() {
    let s = session("7 =");
    assert_eq!(s.tampon(), "7");
    assert_eq!(s.historique()[0].expression, "7");
    assert!(s.est_verrouille());
}

#[test]
fn chiffre_apres_resultat_demarre_un_nouveau_nombre() {
    let s = session("2 + 3 = 7");
    assert_eq!(s.tampon(), "7");
    assert_eq!(s.texte_expression(), "");
    assert!(!s.est_verrouille());

    let s = session("2 + 3 = .");
    assert_eq!(s.tampon(), "0.");
}

#[test]
fn operateur_apres_resultat_enchaine() {
    let s = session("2 + 3 = * 2");
    assert_eq!(s.texte_expression(), "5 ×");
    assert_eq!(s.tampon(), "2");
    let s = session("2 + 3 = * 2 =");
    assert_eq!(s.tampon(), "10");
}

#[test]
fn resultat_negatif_reutilise() {
    let s = session("2 - 5 = * 2 =");
    assert_eq!(s.tampon(), "-6");
    assert_eq!(s.historique()[0].expression, "-3 × 2");
}

#[test]
fn decimales_arrondies() {
    let s = session("1 / 3 =");
    assert_eq!(s.tampon(), "0.3333333333");
    let s = session(".1 + .2 =");
    assert_eq!(s.texte_affiche(), "0.3");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn division_par_zero_puis_reprise() {
    let mut s = session("5 / 0 =");
    assert_eq!(s.erreur(), Some(Sentinelle::DivisionParZero));
    assert_eq!(s.texte_affiche(), "Cannot divide by zero");
    assert!(s.historique().is_empty());

    taper(&mut s, "7 + = ~ %");
    s.unaire(OperateurUnaire::Carre);
    s.memoire_stocker();
    assert_eq!(s.tampon(), "Cannot divide by zero");
    assert!(!s.memoire_active());

    taper(&mut s, "C");
    assert!(!s.est_en_erreur());
    assert_eq!(s.tampon(), "0");
    assert_eq!(s.texte_expression(), "");
}

#[test]
fn ce_et_retour_arriere_en_erreur_remettent_a_zero() {
    let s = session("5 / 0 = E");
    assert!(!s.est_en_erreur());
    assert_eq!(s.tampon(), "0");

    let s = session("5 / 0 = <");
    assert!(!s.est_en_erreur());
    assert_eq!(s.tampon(), "0");
}

#[test]
fn ce_garde_la_repetition() {
    // CE sur un résultat : le verrou et la paire « + 3 » survivent
    let mut s = session("2 + 3 = E");
    assert_eq!(s.tampon(), "0");
    assert!(s.est_verrouille());
    s.egal();
    assert_eq!(s.tampon(), "3");
    assert_eq!(s.historique()[0].expression, "0 + 3");
    s.egal();
    assert_eq!(s.tampon(), "6");

    // CE en cours d’expression : la répétition suit l’opérande retapé
    let s = session("6 * 5 E 2 = =");
    assert_eq!(s.tampon(), "24");
    assert_eq!(s.historique()[0].expression, "12 × 2");
}

#[test]
fn apres_c_plus_de_repetition() {
    let s = session("2 + 3 = C 4 ==");
    assert_eq!(s.tampon(), "4");
}

/* ------------------------ Unaires et pourcentage ------------------------ */

#[test]
fn racine_verrouille_et_journalise() {
    let mut s = session("9");
    s.unaire(OperateurUnaire::Racine);
    assert_eq!(s.tampon(), "3");
    assert!(s.est_verrouille());
    assert_eq!(s.texte_expression(), "√(9)");
    assert_eq!(s.historique()[0].expression, "√(9)");

    // = sans rien à répéter : la valeur reste
    s.egal();
    assert_eq!(s.tampon(), "3");

    taper(&mut s, "4");
    assert_eq!(s.tampon(), "4");
    assert_eq!(s.texte_expression(), "");
}

#[test]
fn unaires_en_erreur() {
    let mut s = session("9~");
    s.unaire(OperateurUnaire::Racine);
    assert_eq!(s.erreur(), Some(Sentinelle::Erreur));

    let mut s = Session::new();
    s.unaire(OperateurUnaire::Inverse);
    assert_eq!(s.erreur(), Some(Sentinelle::DivisionParZero));
}

#[test]
fn unaire_puis_operateur() {
    let mut s = session("5");
    s.unaire(OperateurUnaire::Carre);
    taper(&mut s, "+ 1 =");
    assert_eq!(s.tampon(), "26");
    assert_eq!(s.historique()[0].expression, "25 + 1");
}

#[test]
fn pourcentage_sans_verrou() {
    let s = session("50%");
    assert_eq!(s.tampon(), "0.5");
    assert!(!s.est_verrouille());
    assert!(s.historique().is_empty());

    let s = session("200 + 10% =");
    assert_eq!(s.tampon(), "200.1");
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn memoire_scenario_complet() {
    let mut s = session("7");
    s.memoire_stocker();
    assert!(s.memoire_active());
    s.memoire_rappeler();
    assert_eq!(s.tampon(), "7");

    taper(&mut s, "C 3");
    s.memoire_ajouter();
    s.memoire_rappeler();
    assert_eq!(s.tampon(), "10");

    taper(&mut s, "E 4");
    s.memoire_soustraire();
    s.memoire_rappeler();
    assert_eq!(s.tampon(), "6");

    s.memoire_effacer();
    assert!(!s.memoire_active());
    taper(&mut s, "E 8");
    s.memoire_rappeler();
    assert_eq!(s.tampon(), "8");
}

#[test]
fn memoire_survit_a_c() {
    let mut s = session("5");
    s.memoire_stocker();
    taper(&mut s, "C");
    assert_eq!(s.emplacements_memoire(), &[5.0]);
}

#[test]
fn memoire_pile_et_rappel_par_case() {
    let mut s = session("1");
    s.memoire_stocker();
    taper(&mut s, "E 2");
    s.memoire_stocker();
    assert_eq!(s.emplacements_memoire(), &[2.0, 1.0]);

    s.rappeler_memoire(1);
    assert_eq!(s.tampon(), "1");
    s.rappeler_memoire(9);
    assert_eq!(s.tampon(), "1");
}

#[test]
fn memoire_case_simple() {
    let mut s = Session::avec_registre(&Reglages::default(), RegistreSimple::default());
    taper(&mut s, "1");
    s.memoire_stocker();
    taper(&mut s, "E 2");
    s.memoire_stocker();
    assert_eq!(s.emplacements_memoire(), &[2.0]);

    let reglages = Reglages {
        memoire: TypeRegistre::Simple,
        ..Reglages::default()
    };
    let mut s = Session::depuis_reglages(&reglages);
    taper(&mut s, "4");
    s.memoire_soustraire();
    assert_eq!(s.emplacements_memoire(), &[4.0]);
}

#[test]
fn ms_leve_le_verrou() {
    let mut s = session("2 + 3 =");
    assert!(s.est_verrouille());
    s.memoire_stocker();
    assert!(!s.est_verrouille());
    taper(&mut s, "4");
    assert_eq!(s.tampon(), "54");
    assert_eq!(s.emplacements_memoire(), &[5.0]);
}

#[test]
fn m_plus_sur_registre_vide_leve_le_verrou() {
    let mut s = session("2 + 3 =");
    s.memoire_ajouter();
    assert!(!s.est_verrouille());
    assert_eq!(s.emplacements_memoire(), &[5.0]);

    // registre non vide : M+ ne touche pas au verrou
    taper(&mut s, "C 1 + 1 =");
    s.memoire_ajouter();
    assert!(s.est_verrouille());
    assert_eq!(s.emplacements_memoire(), &[7.0]);

    let mut s = session("2 - 5 =");
    s.memoire_soustraire();
    assert!(!s.est_verrouille());
    assert_eq!(s.emplacements_memoire(), &[-3.0]);
}

#[test]
fn rappel_memoire_deverrouille() {
    let mut s = session("6");
    s.memoire_stocker();
    taper(&mut s, "E 2 + 3 =");
    assert!(s.est_verrouille());
    s.memoire_rappeler();
    assert!(!s.est_verrouille());
    assert_eq!(s.tampon(), "6");
}

/* ------------------------ Historique ------------------------ */

#[test]
fn rappel_historique() {
    let mut s = session("2 + 3 = C 10 / 4 =");
    assert_eq!(s.historique().len(), 2);
    assert_eq!(s.historique()[0].resultat, 2.5);

    s.rappeler_historique(1);
    assert_eq!(s.tampon(), "5");
    assert!(!s.est_verrouille());

    taper(&mut s, "0");
    assert_eq!(s.tampon(), "50");
}
