use super::{CtaStyle, Slot};

pub(super) const ENTRIES: &[(Slot, &[&str])] = &[
    (
        Slot::Situation,
        &[
            "Imagine you are dealing with {subject} for the very first time.",
            "Most people run into {subject} every day without noticing what is at stake.",
            "It all starts simply when {subject} is involved.",
            "Think about the last time {subject} showed up in your routine.",
        ],
    ),
    (
        Slot::Conflict,
        &[
            "But then a problem appears: everything you knew about {subject} stops working.",
            "The obstacle shows up when {subject} gets completely out of hand.",
            "That is where most people quit, because {subject} looks too complicated.",
            "What nobody tells you is that {subject} hides a trap.",
        ],
    ),
    (
        Slot::Resolution,
        &[
            "The turning point comes when you understand the real role of {subject}.",
            "The answer is to treat {subject} with method and patience.",
            "Once you change the way you look at {subject}, everything clicks.",
            "The secret is turning {subject} into a habit instead of a struggle.",
        ],
    ),
    (
        Slot::Question,
        &[
            "What if {subject} was the missing piece all along?",
            "Have you ever stopped to think how much {subject} shapes your choices?",
            "How much longer will you ignore {subject}?",
        ],
    ),
    (
        Slot::ForwardReference,
        &[
            "In the next part, we will see how this changes everything about {subject}.",
            "Keep this in mind, because next it will make even more sense for {subject}.",
            "And what comes next takes {subject} to another level.",
        ],
    ),
    (
        Slot::Closing,
        &["And that is how this journey comes full circle."],
    ),
    (
        Slot::TitlePersonas,
        &[
            "Experts reveal",
            "A beginner discovered",
            "Insiders know",
            "Scientists explain",
        ],
    ),
    (
        Slot::TitleActions,
        &[
            "the truth about",
            "the secret method behind",
            "how to master",
            "the fatal mistake in",
        ],
    ),
    (
        Slot::TitleHooks,
        &[
            "that nobody told you",
            "before it is too late",
            "in just minutes",
            "and the result is shocking",
        ],
    ),
    (
        Slot::HookPhrases,
        &[
            "Have you ever wondered why {subject} feels so hard for most people?",
            "Stay until the end, because what I will show you about {subject} can change your mind.",
            "There is a side of {subject} almost nobody dares to show.",
        ],
    ),
    (
        Slot::IntroPhrases,
        &[
            "Today we dive into {subject}, starting with something almost nobody notices: {keyword}.",
            "In this video you will see how {keyword} connects to {subject} in a practical way.",
            "Before talking about {subject}, we need to understand one key word: {keyword}.",
        ],
    ),
    (
        Slot::ConclusionBase,
        &[
            "Now you know the pillars of {subject} and you are ready for the next step.",
            "We have reached the end, and {subject} will never look the same to you.",
        ],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Emotional),
        &[
            "If this story touched you, leave a like and share it with someone who needs to hear it.",
            "If you felt something different just now, share that feeling with someone special.",
        ],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Appeal),
        &[
            "Subscribe to the channel and hit the bell so you never miss the next videos.",
            "Click subscribe now and become part of this community.",
        ],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Reflective),
        &[
            "Think about it and tell us in the comments what you will do differently from today.",
            "Reflect for a moment: what does this idea change in your life?",
        ],
    ),
    (
        Slot::Cta(CtaStyle::Emotional),
        &["If this content touched your heart, leave a like and share it with someone who needs to hear it today."],
    ),
    (
        Slot::Cta(CtaStyle::Appeal),
        &["Subscribe to the channel now and hit the bell to get the next videos first."],
    ),
    (
        Slot::Cta(CtaStyle::Reflective),
        &["Take a moment to reflect on what you just heard and tell us in the comments your biggest lesson."],
    ),
    (
        Slot::MiniCta,
        &[
            "Enjoying it so far? Leave a like!",
            "Tell me in the comments what you think.",
            "Save this video to watch again later.",
            "Share this with a friend who needs to hear it.",
        ],
    ),
];
