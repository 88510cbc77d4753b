use super::{CtaStyle, Slot};

pub(super) const ENTRIES: &[(Slot, &[&str])] = &[
    (
        Slot::Situation,
        &[
            "Imagine que tu découvres {subject} pour la toute première fois.",
            "Beaucoup de gens croisent {subject} chaque jour sans voir ce qui est en jeu.",
            "Tout commence simplement quand il s'agit de {subject}.",
        ],
    ),
    (
        Slot::Conflict,
        &[
            "Mais un problème surgit : tout ce que tu savais sur {subject} ne fonctionne plus.",
            "L'obstacle apparaît quand {subject} échappe totalement à ton contrôle.",
            "C'est là que la plupart abandonnent, parce que {subject} semble trop compliqué.",
        ],
    ),
    (
        Slot::Resolution,
        &[
            "Le déclic arrive quand tu comprends le vrai rôle de {subject}.",
            "La solution consiste à aborder {subject} avec méthode et patience.",
            "Dès que tu changes ton regard sur {subject}, tout s'emboîte.",
        ],
    ),
    (
        Slot::Question,
        &[
            "Et si {subject} était la pièce qui te manquait ?",
            "As-tu déjà pensé à quel point {subject} influence tes choix ?",
            "Combien de temps vas-tu encore ignorer {subject} ?",
        ],
    ),
    (
        Slot::ForwardReference,
        &[
            "Dans la prochaine partie, on verra comment cela change tout pour {subject}.",
            "Garde cette idée en tête, car elle prendra encore plus de sens pour {subject}.",
        ],
    ),
    (
        Slot::Closing,
        &["Et c'est ainsi que la boucle de ce voyage se referme."],
    ),
    (
        Slot::TitlePersonas,
        &[
            "Des experts révèlent",
            "Un débutant a découvert",
            "Les initiés savent",
            "Des scientifiques expliquent",
        ],
    ),
    (
        Slot::TitleActions,
        &[
            "la vérité sur",
            "la méthode secrète de",
            "comment maîtriser",
            "l'erreur fatale dans",
        ],
    ),
    (
        Slot::TitleHooks,
        &[
            "que personne ne t'a dite",
            "avant qu'il ne soit trop tard",
            "en quelques minutes",
            "et le résultat surprend",
        ],
    ),
    (
        Slot::HookPhrases,
        &[
            "Tu t'es déjà demandé pourquoi {subject} paraît si difficile pour la plupart des gens ?",
            "Reste jusqu'à la fin, car ce que je vais te montrer sur {subject} peut changer ta vision.",
            "Il existe une face de {subject} que presque personne n'ose montrer.",
        ],
    ),
    (
        Slot::IntroPhrases,
        &[
            "Aujourd'hui on plonge dans {subject}, en commençant par un détail que presque personne ne remarque : {keyword}.",
            "Dans cette vidéo tu vas comprendre comment {keyword} se relie à {subject} de façon concrète.",
        ],
    ),
    (
        Slot::ConclusionBase,
        &[
            "Tu connais maintenant les piliers de {subject} et tu es prêt pour la prochaine étape.",
            "Nous voici à la fin, et {subject} ne te paraîtra plus jamais pareil.",
        ],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Emotional),
        &["Si cette histoire t'a touché, laisse un like et partage-la avec quelqu'un qui a besoin de l'entendre."],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Appeal),
        &["Abonne-toi à la chaîne et active la cloche pour ne manquer aucune vidéo."],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Reflective),
        &["Réfléchis-y et dis-nous en commentaire ce que tu vas faire autrement dès aujourd'hui."],
    ),
    (
        Slot::Cta(CtaStyle::Emotional),
        &["Si ce contenu a touché ton cœur, laisse un like et partage-le avec quelqu'un qui a besoin de l'entendre aujourd'hui."],
    ),
    (
        Slot::Cta(CtaStyle::Appeal),
        &["Abonne-toi maintenant à la chaîne et active la cloche pour recevoir les prochaines vidéos en avant-première."],
    ),
    (
        Slot::Cta(CtaStyle::Reflective),
        &["Prends un instant pour réfléchir à ce que tu viens d'entendre et partage ta plus grande leçon en commentaire."],
    ),
    (
        Slot::MiniCta,
        &[
            "Ça te plaît jusqu'ici ? Laisse un like !",
            "Dis-moi en commentaire ce que tu en penses.",
            "Enregistre cette vidéo pour la revoir plus tard.",
            "Partage-la avec un ami qui a besoin de l'entendre.",
        ],
    ),
];
