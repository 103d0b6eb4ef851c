//! Built-in irregular verb table.

use vocab_types::VerbForms;

const fn verb(
    base: &'static str,
    past: &'static [&'static str],
    past_participle: &'static [&'static str],
    present_participle: &'static [&'static str],
    third_person: &'static [&'static str],
    other_forms: &'static [&'static str],
) -> VerbForms {
    VerbForms {
        base,
        past,
        past_participle,
        present_participle,
        third_person,
        other_forms,
    }
}

/// Common English verbs whose past forms do not follow the suffix rules.
///
/// Columns: base, past, past participle, present participle, third person,
/// other forms.
pub static IRREGULAR_VERBS: &[VerbForms] = &[
    verb("be", &["was", "were"], &["been"], &["being"], &["is"], &["am", "are"]),
    verb("have", &["had"], &["had"], &["having"], &["has"], &[]),
    verb("do", &["did"], &["done"], &["doing"], &["does"], &[]),
    verb("go", &["went"], &["gone"], &["going"], &["goes"], &[]),
    verb("get", &["got"], &["got", "gotten"], &["getting"], &["gets"], &[]),
    verb("make", &["made"], &["made"], &["making"], &["makes"], &[]),
    verb("take", &["took"], &["taken"], &["taking"], &["takes"], &[]),
    verb("come", &["came"], &["come"], &["coming"], &["comes"], &[]),
    verb("see", &["saw"], &["seen"], &["seeing"], &["sees"], &[]),
    verb("know", &["knew"], &["known"], &["knowing"], &["knows"], &[]),
    verb("think", &["thought"], &["thought"], &["thinking"], &["thinks"], &[]),
    verb("give", &["gave"], &["given"], &["giving"], &["gives"], &[]),
    verb("find", &["found"], &["found"], &["finding"], &["finds"], &[]),
    verb("tell", &["told"], &["told"], &["telling"], &["tells"], &[]),
    verb("become", &["became"], &["become"], &["becoming"], &["becomes"], &[]),
    verb("leave", &["left"], &["left"], &["leaving"], &["leaves"], &[]),
    verb("feel", &["felt"], &["felt"], &["feeling"], &["feels"], &[]),
    verb("bring", &["brought"], &["brought"], &["bringing"], &["brings"], &[]),
    verb("begin", &["began"], &["begun"], &["beginning"], &["begins"], &[]),
    verb("keep", &["kept"], &["kept"], &["keeping"], &["keeps"], &[]),
    verb("hold", &["held"], &["held"], &["holding"], &["holds"], &[]),
    verb("write", &["wrote"], &["written"], &["writing"], &["writes"], &[]),
    verb("stand", &["stood"], &["stood"], &["standing"], &["stands"], &[]),
    verb("hear", &["heard"], &["heard"], &["hearing"], &["hears"], &[]),
    verb("let", &["let"], &["let"], &["letting"], &["lets"], &[]),
    verb("mean", &["meant"], &["meant"], &["meaning"], &["means"], &[]),
    verb("set", &["set"], &["set"], &["setting"], &["sets"], &[]),
    verb("meet", &["met"], &["met"], &["meeting"], &["meets"], &[]),
    verb("run", &["ran"], &["run"], &["running"], &["runs"], &[]),
    verb("pay", &["paid"], &["paid"], &["paying"], &["pays"], &[]),
    verb("sit", &["sat"], &["sat"], &["sitting"], &["sits"], &[]),
    verb("speak", &["spoke"], &["spoken"], &["speaking"], &["speaks"], &[]),
    verb("lie", &["lay", "lied"], &["lain", "lied"], &["lying"], &["lies"], &[]),
    verb("lead", &["led"], &["led"], &["leading"], &["leads"], &[]),
    verb("read", &["read"], &["read"], &["reading"], &["reads"], &[]),
    verb("grow", &["grew"], &["grown"], &["growing"], &["grows"], &[]),
    verb("lose", &["lost"], &["lost"], &["losing"], &["loses"], &[]),
    verb("fall", &["fell"], &["fallen"], &["falling"], &["falls"], &[]),
    verb("send", &["sent"], &["sent"], &["sending"], &["sends"], &[]),
    verb("build", &["built"], &["built"], &["building"], &["builds"], &[]),
    verb("understand", &["understood"], &["understood"], &["understanding"], &["understands"], &[]),
    verb("draw", &["drew"], &["drawn"], &["drawing"], &["draws"], &[]),
    verb("break", &["broke"], &["broken"], &["breaking"], &["breaks"], &[]),
    verb("spend", &["spent"], &["spent"], &["spending"], &["spends"], &[]),
    verb("cut", &["cut"], &["cut"], &["cutting"], &["cuts"], &[]),
    verb("rise", &["rose"], &["risen"], &["rising"], &["rises"], &[]),
    verb("drive", &["drove"], &["driven"], &["driving"], &["drives"], &[]),
    verb("buy", &["bought"], &["bought"], &["buying"], &["buys"], &[]),
    verb("wear", &["wore"], &["worn"], &["wearing"], &["wears"], &[]),
    verb("choose", &["chose"], &["chosen"], &["choosing"], &["chooses"], &[]),
    verb("sing", &["sang"], &["sung"], &["singing"], &["sings"], &[]),
    verb("teach", &["taught"], &["taught"], &["teaching"], &["teaches"], &[]),
    verb("catch", &["caught"], &["caught"], &["catching"], &["catches"], &[]),
    verb("throw", &["threw"], &["thrown"], &["throwing"], &["throws"], &[]),
    verb("forget", &["forgot"], &["forgotten"], &["forgetting"], &["forgets"], &[]),
    verb("swim", &["swam"], &["swum"], &["swimming"], &["swims"], &[]),
    verb("sell", &["sold"], &["sold"], &["selling"], &["sells"], &[]),
    verb("drink", &["drank"], &["drunk"], &["drinking"], &["drinks"], &[]),
    verb("sleep", &["slept"], &["slept"], &["sleeping"], &["sleeps"], &[]),
    verb("eat", &["ate"], &["eaten"], &["eating"], &["eats"], &[]),
    verb("win", &["won"], &["won"], &["winning"], &["wins"], &[]),
    verb("fight", &["fought"], &["fought"], &["fighting"], &["fights"], &[]),
    verb("fly", &["flew"], &["flown"], &["flying"], &["flies"], &[]),
    verb("put", &["put"], &["put"], &["putting"], &["puts"], &[]),
    verb("cost", &["cost"], &["cost"], &["costing"], &["costs"], &[]),
    verb("hit", &["hit"], &["hit"], &["hitting"], &["hits"], &[]),
    verb("hurt", &["hurt"], &["hurt"], &["hurting"], &["hurts"], &[]),
    verb("shut", &["shut"], &["shut"], &["shutting"], &["shuts"], &[]),
    verb("quit", &["quit"], &["quit"], &["quitting"], &["quits"], &[]),
    verb("spread", &["spread"], &["spread"], &["spreading"], &["spreads"], &[]),
    verb("deal", &["dealt"], &["dealt"], &["dealing"], &["deals"], &[]),
    verb("steal", &["stole"], &["stolen"], &["stealing"], &["steals"], &[]),
    verb("shoot", &["shot"], &["shot"], &["shooting"], &["shoots"], &[]),
    verb("hide", &["hid"], &["hidden"], &["hiding"], &["hides"], &[]),
    verb("bite", &["bit"], &["bitten"], &["biting"], &["bites"], &[]),
    verb("ring", &["rang"], &["rung"], &["ringing"], &["rings"], &[]),
    verb("blow", &["blew"], &["blown"], &["blowing"], &["blows"], &[]),
    verb("shake", &["shook"], &["shaken"], &["shaking"], &["shakes"], &[]),
    verb("freeze", &["froze"], &["frozen"], &["freezing"], &["freezes"], &[]),
    verb("light", &["lit", "lighted"], &["lit", "lighted"], &["lighting"], &["lights"], &[]),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_holds_eighty_verbs() {
        assert_eq!(IRREGULAR_VERBS.len(), 80);
        assert_eq!(IRREGULAR_VERBS[0].base, "be");
    }

    #[test]
    fn bases_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for forms in IRREGULAR_VERBS {
            assert!(seen.insert(forms.base), "duplicate base {}", forms.base);
            for form in forms.all_forms() {
                assert_eq!(form, form.to_lowercase());
                assert!(!form.is_empty());
            }
        }
    }

    #[test]
    fn every_verb_has_core_slots() {
        for forms in IRREGULAR_VERBS {
            assert!(!forms.past.is_empty(), "{} has no past", forms.base);
            assert!(!forms.past_participle.is_empty());
            assert!(!forms.present_participle.is_empty());
            assert!(!forms.third_person.is_empty());
        }
    }
}
