use super::{CtaStyle, Slot};

pub(super) const ENTRIES: &[(Slot, &[&str])] = &[
    (
        Slot::Situation,
        &[
            "Imagine que você está começando a lidar com {subject} hoje.",
            "Muita gente encara {subject} todos os dias sem perceber o que está em jogo.",
            "Tudo começa de um jeito simples quando o assunto é {subject}.",
            "Pense na última vez em que {subject} apareceu na sua rotina.",
        ],
    ),
    (
        Slot::Conflict,
        &[
            "Mas logo surge um problema: o que você sabia sobre {subject} deixa de funcionar.",
            "O obstáculo aparece quando {subject} foge completamente do controle.",
            "E é aí que a maioria desiste, porque {subject} parece complicado demais.",
            "O detalhe que ninguém conta é que {subject} esconde uma armadilha.",
        ],
    ),
    (
        Slot::Resolution,
        &[
            "A virada acontece quando você entende o verdadeiro papel de {subject}.",
            "A solução está em tratar {subject} com método e paciência.",
            "Quando você muda a forma de olhar para {subject}, tudo se encaixa.",
            "O segredo é transformar {subject} em um hábito, não em um esforço.",
        ],
    ),
    (
        Slot::Question,
        &[
            "E se {subject} fosse a peça que faltava para você?",
            "Você já parou para pensar no quanto {subject} influencia suas escolhas?",
            "Quanto tempo mais você vai ignorar {subject}?",
        ],
    ),
    (
        Slot::ForwardReference,
        &[
            "No próximo bloco, vamos ver como isso muda tudo em {subject}.",
            "Guarde essa ideia, porque a seguir ela vai fazer ainda mais sentido em {subject}.",
            "E o que vem agora vai levar {subject} para outro nível.",
        ],
    ),
    (
        Slot::Closing,
        &["E assim fechamos o ciclo desta jornada."],
    ),
    (
        Slot::TitlePersonas,
        &[
            "Especialistas revelam",
            "Um iniciante descobriu",
            "Quem domina sabe",
            "Cientistas explicam",
        ],
    ),
    (
        Slot::TitleActions,
        &[
            "a verdade sobre",
            "o método secreto de",
            "como dominar",
            "o erro fatal em",
        ],
    ),
    (
        Slot::TitleHooks,
        &[
            "que ninguém te contou",
            "antes que seja tarde",
            "em poucos minutos",
            "e o resultado surpreende",
        ],
    ),
    (
        Slot::HookPhrases,
        &[
            "Você já se perguntou por que {subject} parece tão difícil para a maioria das pessoas?",
            "Fique até o final, porque o que eu vou mostrar sobre {subject} pode mudar sua visão.",
            "Existe um lado de {subject} que quase ninguém tem coragem de mostrar.",
        ],
    ),
    (
        Slot::IntroPhrases,
        &[
            "Hoje vamos mergulhar em {subject}, começando por algo que quase ninguém percebe: {keyword}.",
            "Neste vídeo você vai entender como {keyword} se conecta com {subject} de um jeito prático.",
            "Antes de falar de {subject}, precisamos entender uma palavra-chave: {keyword}.",
        ],
    ),
    (
        Slot::ConclusionBase,
        &[
            "Agora você conhece os pilares de {subject} e está pronto para dar o próximo passo.",
            "Chegamos ao fim, e {subject} nunca mais vai parecer o mesmo para você.",
        ],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Emotional),
        &[
            "Se esta história tocou você, deixe seu like e compartilhe com quem precisa ouvir isso.",
            "Se você sentiu algo diferente agora, compartilhe esse sentimento com alguém especial.",
        ],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Appeal),
        &[
            "Inscreva-se no canal e ative o sininho para não perder os próximos vídeos.",
            "Clique em inscrever-se agora e venha fazer parte desta comunidade.",
        ],
    ),
    (
        Slot::ConclusionCta(CtaStyle::Reflective),
        &[
            "Pense nisso e conte nos comentários o que você vai fazer diferente a partir de hoje.",
            "Reflita por um instante: o que essa ideia muda na sua vida?",
        ],
    ),
    (
        Slot::Cta(CtaStyle::Emotional),
        &["Se este conteúdo tocou o seu coração, deixe seu like e compartilhe com alguém que precisa ouvir isso hoje."],
    ),
    (
        Slot::Cta(CtaStyle::Appeal),
        &["Inscreva-se agora no canal e ative o sininho para receber os próximos vídeos em primeira mão."],
    ),
    (
        Slot::Cta(CtaStyle::Reflective),
        &["Pare um momento para refletir sobre o que você ouviu e conte nos comentários qual foi a sua maior lição."],
    ),
    (
        Slot::MiniCta,
        &[
            "Curtiu até aqui? Deixe seu like!",
            "Comente aqui embaixo o que você achou.",
            "Salve este vídeo para rever depois.",
            "Compartilhe com um amigo que precisa ouvir isso.",
        ],
    ),
];
