use super::{CtaStyle, Slot};

pub(super) const ENTRIES: &[(Slot, &[&str])] = &[
    (
        Slot::Situation,
        &[
            "Imagina que estás enfrentando {subject} por primera vez.",
            "Mucha gente se cruza con {subject} todos los días sin notar lo que está en juego.",
            "Todo empieza de forma sencilla cuando se trata de {subject}.",
        ],
    ),
    (
        Slot::Conflict,
        &[
            "Pero pronto surge un problema: lo que sabías sobre {subject} deja de funcionar.",
            "El obstáculo aparece cuando {subject} se sale de control.",
            "Ahí es donde la mayoría se rinde, porque {subject} parece demasiado complicado.",
        ],
    ),
    (
        Slot::Resolution,
        &[
            "El giro llega cuando entiendes el verdadero papel de {subject}.",
            "La solución es tratar {subject} con método y paciencia.",
            "Cuando cambias tu forma de ver {subject}, todo encaja.",
        ],
    ),
    (
        Slot::Question,
        &[
            "¿Y si {subject} fuera la pieza que te faltaba?",
            "¿Alguna vez pensaste cuánto influye {subject} en tus decisiones?",
            "¿Cuánto tiempo más vas a ignorar {subject}?",
        ],
    ),
    (
        Slot::ForwardReference,
        &[
            "En el próximo bloque veremos cómo esto lo cambia todo en {subject}.",
            "Guarda esta idea, porque enseguida tendrá aún más sentido en {subject}.",
        ],
    ),
    (
        Slot::Closing,
        &["Y así cerramos el ciclo de este viaje."],
    ),
    (
        Slot::TitlePersonas,
        &[
            "Expertos revelan",
            "Un principiante descubrió",
            "Quien domina sabe",
            "Científicos explican",
        ],
    ),
    (
        Slot::TitleActions,
        &[
            "la verdad sobre",
            "el método secreto de",
            "cómo dominar",
            "el error fatal en",
        ],
    ),
    (
        Slot::TitleHooks,
        &[
            "que nadie te contó",
            "antes de que sea tarde",
            "en pocos minutos",
            "y el resultado sorprende",
        ],
    ),
    (
        Slot::HookPhrases,
        &[
            "¿Alguna vez te preguntaste por qué {subject} parece tan difícil para la mayoría?",
            "Quédate hasta el final, porque lo que voy a mostrarte sobre {subject} puede cambiar tu visión.",
            "Hay un lado de {subject} que casi nadie se atreve a mostrar.",
        ],
    ),
    (
        Slot::IntroPhrases,
        &[
            "Hoy vamos a sumergirnos en {subject}, empezando por algo que casi nadie nota: {keyword}.",
            "En este video vas a entender cómo {keyword} se conecta con {subject} de forma práctica.",
        ],
    ),
    (
        Slot::ConclusionBase,
        &[
            "Ahora conoces los pilares de {subject} y estás listo para dar el siguiente paso.",
            "Llegamos al final, y {subject} nunca volverá a parecerte igual.",
        ],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Emotional),
        &["Si esta historia te llegó, deja tu like y compártela con quien necesita escucharla."],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Appeal),
        &["Suscríbete al canal y activa la campanita para no perderte los próximos videos."],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Reflective),
        &["Piénsalo y cuéntanos en los comentarios qué vas a hacer diferente desde hoy."],
    ),
    (
        Slot::Cta(CtaStyle::Emotional),
        &["Si este contenido tocó tu corazón, deja tu like y compártelo con alguien que necesita escucharlo hoy."],
    ),
    (
        Slot::Cta(CtaStyle::Appeal),
        &["Suscríbete ahora al canal y activa la campanita para recibir los próximos videos primero."],
    ),
    (
        Slot::Cta(CtaStyle::Reflective),
        &["Tómate un momento para reflexionar sobre lo que escuchaste y cuéntanos en los comentarios tu mayor lección."],
    ),
    (
        Slot::MiniCta,
        &[
            "¿Te está gustando? ¡Deja tu like!",
            "Cuéntame en los comentarios qué te parece.",
            "Guarda este video para verlo de nuevo.",
            "Compártelo con un amigo que necesita escucharlo.",
        ],
    ),
];
