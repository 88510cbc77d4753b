use super::{CtaStyle, Slot};

pub(super) const ENTRIES: &[(Slot, &[&str])] = &[
    (
        Slot::Situation,
        &[
            "Stell dir vor, du hast zum ersten Mal mit {subject} zu tun.",
            "Viele begegnen {subject} jeden Tag, ohne zu merken, worum es geht.",
            "Alles beginnt ganz einfach, wenn es um {subject} geht.",
        ],
    ),
    (
        Slot::Conflict,
        &[
            "Doch dann taucht ein Problem auf: Alles, was du über {subject} wusstest, funktioniert nicht mehr.",
            "Das Hindernis kommt, wenn {subject} völlig außer Kontrolle gerät.",
            "Genau hier geben die meisten auf, weil {subject} zu kompliziert wirkt.",
        ],
    ),
    (
        Slot::Resolution,
        &[
            "Die Wende kommt, wenn du die wahre Rolle von {subject} verstehst.",
            "Die Lösung ist, {subject} mit Methode und Geduld anzugehen.",
            "Sobald du {subject} anders betrachtest, passt alles zusammen.",
        ],
    ),
    (
        Slot::Question,
        &[
            "Was wäre, wenn {subject} das fehlende Puzzlestück ist?",
            "Hast du je darüber nachgedacht, wie sehr {subject} deine Entscheidungen prägt?",
            "Wie lange willst du {subject} noch ignorieren?",
        ],
    ),
    (
        Slot::ForwardReference,
        &[
            "Im nächsten Abschnitt sehen wir, wie das alles bei {subject} verändert.",
            "Behalte diesen Gedanken, denn gleich ergibt er bei {subject} noch mehr Sinn.",
        ],
    ),
    (
        Slot::Closing,
        &["Und damit schließt sich der Kreis dieser Reise."],
    ),
    (
        Slot::TitlePersonas,
        &[
            "Experten enthüllen",
            "Ein Anfänger entdeckte",
            "Insider wissen",
            "Wissenschaftler erklären",
        ],
    ),
    (
        Slot::TitleActions,
        &[
            "die Wahrheit über",
            "die geheime Methode hinter",
            "wie man meistert:",
            "den fatalen Fehler bei",
        ],
    ),
    (
        Slot::TitleHooks,
        &[
            "die dir niemand verraten hat",
            "bevor es zu spät ist",
            "in wenigen Minuten",
            "und das Ergebnis überrascht",
        ],
    ),
    (
        Slot::HookPhrases,
        &[
            "Hast du dich je gefragt, warum {subject} für die meisten so schwer ist?",
            "Bleib bis zum Ende, denn was ich dir über {subject} zeige, kann deine Sicht verändern.",
            "Es gibt eine Seite von {subject}, die kaum jemand zu zeigen wagt.",
        ],
    ),
    (
        Slot::IntroPhrases,
        &[
            "Heute tauchen wir in {subject} ein und beginnen mit etwas, das kaum jemand bemerkt: {keyword}.",
            "In diesem Video erfährst du, wie {keyword} ganz praktisch mit {subject} zusammenhängt.",
        ],
    ),
    (
        Slot::ConclusionBase,
        &[
            "Jetzt kennst du die Grundpfeiler von {subject} und bist bereit für den nächsten Schritt.",
            "Wir sind am Ende, und {subject} wird für dich nie mehr dasselbe sein.",
        ],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Emotional),
        &["Wenn dich diese Geschichte berührt hat, lass ein Like da und teile sie mit jemandem, der sie hören muss."],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Appeal),
        &["Abonniere den Kanal und aktiviere die Glocke, damit du kein Video verpasst."],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Reflective),
        &["Denk darüber nach und schreib in die Kommentare, was du ab heute anders machst."],
    ),
    (
        Slot::Cta(CtaStyle::Emotional),
        &["Wenn dieser Inhalt dein Herz berührt hat, lass ein Like da und teile ihn mit jemandem, der ihn heute hören muss."],
    ),
    (
        Slot::Cta(CtaStyle::Appeal),
        &["Abonniere jetzt den Kanal und aktiviere die Glocke, um die nächsten Videos als Erster zu sehen."],
    ),
    (
        Slot::Cta(CtaStyle::Reflective),
        &["Nimm dir einen Moment, um über das Gehörte nachzudenken, und teile deine wichtigste Erkenntnis in den Kommentaren."],
    ),
    (
        Slot::MiniCta,
        &[
            "Gefällt es dir bisher? Lass ein Like da!",
            "Schreib mir in die Kommentare, was du denkst.",
            "Speichere dieses Video für später.",
            "Teile es mit einem Freund, der das hören muss.",
        ],
    ),
];
