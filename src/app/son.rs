// src/app/son.rs
//
// Bips d'interface — best-effort
// ------------------------------
// Une signature sonore (fréquence, durée) par famille d'action. Côté web :
// WebAudio (oscillateur sinus -> gain -> sortie), déclenché et oublié sur
// l'horloge audio. Ailleurs : silencieux.
//
// Contrat : jouer() ne remonte JAMAIS d'erreur. Pas d'audio => pas de son,
// pas de message utilisateur.

/// Familles d'action, chacune avec son timbre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategorieSon {
    Chiffre,
    Operateur,
    Egal,
    Effacement,
    Memoire,
    Erreur,
}

/// (fréquence Hz, durée ms) par catégorie.
pub const fn parametres(categorie: CategorieSon) -> (f32, u32) {
    match categorie {
        CategorieSon::Chiffre => (440.0, 70),
        CategorieSon::Operateur => (520.0, 70),
        CategorieSon::Egal => (660.0, 140),
        CategorieSon::Effacement => (330.0, 90),
        CategorieSon::Memoire => (580.0, 70),
        CategorieSon::Erreur => (220.0, 240),
    }
}

/// Niveau de sortie fixe, volontairement bas.
#[cfg(target_arch = "wasm32")]
const GAIN: f32 = 0.04;

pub struct LecteurSon {
    // Créé paresseusement : les navigateurs exigent un geste utilisateur
    // avant d'ouvrir un AudioContext, le premier clic fait l'affaire.
    #[cfg(target_arch = "wasm32")]
    contexte: Option<web_sys::AudioContext>,
}

impl std::fmt::Debug for LecteurSon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LecteurSon")
    }
}

impl Default for LecteurSon {
    fn default() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            contexte: None,
        }
    }
}

impl LecteurSon {
    /// Joue le bip de la catégorie. Toute panne audio est journalisée puis
    /// ignorée.
    pub fn jouer(&mut self, categorie: CategorieSon) {
        #[cfg(target_arch = "wasm32")]
        if let Err(e) = self.jouer_web(categorie) {
            log::warn!("bip {categorie:?} impossible : {e:?}");
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let (freq, ms) = parametres(categorie);
            log::debug!("bip {categorie:?} ({freq} Hz, {ms} ms)");
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn jouer_web(&mut self, categorie: CategorieSon) -> Result<(), wasm_bindgen::JsValue> {
        if self.contexte.is_none() {
            self.contexte = Some(web_sys::AudioContext::new()?);
        }
        let Some(contexte) = self.contexte.as_ref() else {
            return Ok(());
        };

        let (frequence, duree_ms) = parametres(categorie);

        let oscillateur = contexte.create_oscillator()?;
        let gain = contexte.create_gain()?;

        oscillateur.set_type(web_sys::OscillatorType::Sine);
        oscillateur.frequency().set_value(frequence);
        gain.gain().set_value(GAIN);

        oscillateur.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&contexte.destination())?;

        // déclenché puis oublié : l'arrêt est planifié sur l'horloge audio
        let depart = contexte.current_time();
        oscillateur.start()?;
        oscillateur.stop_with_when(depart + f64::from(duree_ms) / 1000.0)?;

        Ok(())
    }
}
